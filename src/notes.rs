//! Templated study-notes generator.
//!
//! Given a topic, picks a coarse subject from a keyword table and assembles an
//! HTML study guide from fixed section templates. Deterministic, no I/O.
//! Templates use `{topic}` (as typed) and `{Topic}` (capitalised); both are
//! HTML-escaped before substitution.

use tracing::{debug, instrument};

use crate::domain::NotesLevel;
use crate::error::NotesError;
use crate::util::{capitalize_words, escape_html, fill_template};

pub const MIN_TOPIC_CHARS: usize = 3;

#[derive(Clone, Debug)]
pub struct NotesRequest {
    pub topic: String,
    pub level: NotesLevel,
    pub include_examples: bool,
    pub include_diagrams: bool,
}

impl NotesRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            level: NotesLevel::default(),
            include_examples: true,
            include_diagrams: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicCategory {
    Science,
    History,
    Mathematics,
    Technology,
    Literature,
    Business,
    Psychology,
    Medicine,
    General,
}

const TOPIC_KEYWORDS: [(TopicCategory, &[&str]); 8] = [
    (TopicCategory::Science, &["biology", "chemistry", "physics", "photosynthesis", "cell", "atom", "molecule", "dna", "protein", "energy", "force", "gravity", "evolution", "ecosystem", "reaction", "element", "compound"]),
    (TopicCategory::History, &["war", "empire", "revolution", "ancient", "medieval", "renaissance", "industrial", "civilization", "culture", "democracy", "colonialism", "napoleon", "rome", "egypt"]),
    (TopicCategory::Mathematics, &["algebra", "calculus", "geometry", "trigonometry", "statistics", "probability", "equation", "function", "derivative", "integral", "theorem", "proof", "polynomial"]),
    (TopicCategory::Technology, &["computer", "programming", "software", "algorithm", "artificial intelligence", "machine learning", "database", "network", "internet", "coding", "javascript", "python", "rust"]),
    (TopicCategory::Literature, &["shakespeare", "poetry", "novel", "drama", "fiction", "author", "character", "plot", "theme", "symbolism", "metaphor"]),
    (TopicCategory::Business, &["marketing", "management", "finance", "economics", "strategy", "leadership", "entrepreneurship", "accounting", "investment"]),
    (TopicCategory::Psychology, &["behavior", "cognitive", "emotion", "memory", "learning", "personality", "social", "mental health", "therapy", "brain"]),
    (TopicCategory::Medicine, &["anatomy", "physiology", "disease", "treatment", "diagnosis", "surgery", "medicine", "health", "medical", "hospital"]),
];

/// Subject of a topic by substring match on the lowercased topic.
pub fn determine_topic_category(topic: &str) -> TopicCategory {
    let lower = topic.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, kws)| kws.iter().any(|kw| lower.contains(kw)))
        .map(|(cat, _)| *cat)
        .unwrap_or(TopicCategory::General)
}

/// Build the HTML study guide for `req.topic`.
#[instrument(level = "info", skip_all, fields(topic_len = req.topic.len(), level = ?req.level))]
pub fn generate_notes(req: &NotesRequest) -> Result<String, NotesError> {
    let topic = req.topic.trim();
    if topic.chars().count() < MIN_TOPIC_CHARS {
        return Err(NotesError::InvalidTopic { min_chars: MIN_TOPIC_CHARS });
    }

    let category = determine_topic_category(topic);
    let topic_html = escape_html(topic);
    let title_html = escape_html(&capitalize_words(topic));
    let fill = |tpl: &str| fill_template(tpl, &[("topic", topic_html.as_str()), ("Topic", title_html.as_str())]);

    let mut html = format!("<h1>{title_html}</h1>\n\n");
    html.push_str(&fill(introduction(category)));

    html.push_str("<h2>Core Concepts</h2>\n");
    for section in main_sections(category) {
        html.push_str(&fill(section));
    }

    html.push_str("<h2>Key Terms and Concepts</h2>\n<ul>\n");
    for (term, definition) in key_terms(category).iter().take(req.level.depth() + 2) {
        html.push_str(&fill(&format!("<li><strong>{term}:</strong> {definition}</li>\n")));
    }
    html.push_str("</ul>\n\n");

    if req.include_examples {
        html.push_str("<h2>Examples and Case Studies</h2>\n");
        html.push_str(&fill(examples(category)));
    }
    if req.include_diagrams {
        html.push_str("<h2>Visual Representations</h2>\n");
        html.push_str(&fill(diagrams(category)));
    }
    html.push_str(&fill(SUMMARY));

    debug!(target: "study_buddy", ?category, html_len = html.len(), "Generated study notes");
    Ok(html)
}

fn introduction(category: TopicCategory) -> &'static str {
    match category {
        TopicCategory::Science => "<h2>Introduction</h2>\n<p>{Topic} is a fundamental concept in science that plays a crucial role in understanding the natural world. This study guide explores the key principles, mechanisms, and applications of {topic}.</p>\n\n",
        TopicCategory::History => "<h2>Historical Overview</h2>\n<p>{Topic} represents a significant period or event in human history that shaped the course of civilization. Understanding {topic} provides insight into the social, political, and cultural developments of the time.</p>\n\n",
        TopicCategory::Mathematics => "<h2>Mathematical Foundation</h2>\n<p>{Topic} is an important mathematical concept that forms the basis for many advanced theories and practical applications. This guide breaks down the fundamental principles and problem-solving techniques.</p>\n\n",
        TopicCategory::Technology => "<h2>Technical Overview</h2>\n<p>{Topic} is a key technology concept that has changed the way we interact with digital systems. This guide covers the principles, applications, and future implications of {topic}.</p>\n\n",
        _ => "<h2>Overview</h2>\n<p>{Topic} is an important subject that requires thorough understanding. This study guide covers the key concepts, principles, and applications related to {topic}.</p>\n\n",
    }
}

fn main_sections(category: TopicCategory) -> &'static [&'static str] {
    match category {
        TopicCategory::Science => &[
            "<h3>Definition and Basic Principles</h3>\n<p>{Topic} can be defined as a process or concept that involves specific mechanisms and follows established scientific principles. The fundamental aspects include:</p>\n<ul>\n<li>Primary characteristics and properties</li>\n<li>Underlying mechanisms and processes</li>\n<li>Environmental factors and conditions</li>\n<li>Measurable outcomes and effects</li>\n</ul>\n\n",
            "<h3>Scientific Mechanisms</h3>\n<p>The process of {topic} involves several interconnected steps and mechanisms that work together to produce the observed results.</p>\n\n",
            "<h3>Applications and Significance</h3>\n<p>{Topic} has significant applications in various fields and plays an important role in both theoretical understanding and practice.</p>\n\n",
        ],
        TopicCategory::History => &[
            "<h3>Historical Context</h3>\n<p>{Topic} occurred during a historical period characterized by unique social, political, and economic conditions.</p>\n\n",
            "<h3>Key Events and Timeline</h3>\n<p>The development of {topic} can be traced through a series of important events and milestones that shaped its course and outcome.</p>\n\n",
            "<h3>Impact and Consequences</h3>\n<p>The effects of {topic} extended far beyond its immediate time period, influencing later developments and shaping modern society.</p>\n\n",
        ],
        TopicCategory::Mathematics => &[
            "<h3>Mathematical Definition</h3>\n<p>{Topic} is defined through specific formulas, equations, and theoretical frameworks that provide the foundation for analysis.</p>\n\n",
            "<h3>Properties and Theorems</h3>\n<p>Several important properties and theorems are associated with {topic}, each providing unique problem-solving capabilities.</p>\n\n",
            "<h3>Problem-Solving Techniques</h3>\n<p>Mastering {topic} requires understanding the approaches that apply to different types of mathematical challenges.</p>\n\n",
        ],
        _ => &[
            "<h3>Fundamental Concepts</h3>\n<p>{Topic} encompasses several fundamental concepts that form the foundation of understanding in this area.</p>\n\n",
            "<h3>Key Principles</h3>\n<p>The study of {topic} is guided by important principles that help explain how and why certain phenomena occur.</p>\n\n",
            "<h3>Practical Applications</h3>\n<p>Understanding {topic} has practical implications in various real-world scenarios.</p>\n\n",
        ],
    }
}

fn key_terms(category: TopicCategory) -> [(&'static str, &'static str); 4] {
    match category {
        TopicCategory::Science => [
            ("{Topic}", "The primary scientific concept being studied, involving specific processes and mechanisms."),
            ("Process", "The series of steps or mechanisms involved in {topic}."),
            ("Mechanism", "The underlying biological, chemical, or physical processes that drive {topic}."),
            ("Application", "Practical uses and implementations of {topic} in real-world scenarios."),
        ],
        TopicCategory::History => [
            ("{Topic}", "A significant historical event, period, or concept that shaped human civilization."),
            ("Context", "The historical circumstances and conditions surrounding {topic}."),
            ("Impact", "The long-term effects and consequences of {topic} on society and culture."),
            ("Legacy", "The lasting influence of {topic} on subsequent historical developments."),
        ],
        TopicCategory::Mathematics => [
            ("{Topic}", "A mathematical concept with specific properties and applications."),
            ("Formula", "Mathematical expressions used to calculate or represent {topic}."),
            ("Theorem", "Proven mathematical statements related to {topic}."),
            ("Application", "Practical uses of {topic} in solving mathematical problems."),
        ],
        _ => [
            ("{Topic}", "The main subject of study with specific characteristics and applications."),
            ("Principle", "Fundamental rules or concepts that govern {topic}."),
            ("Method", "Approaches and techniques used in studying or applying {topic}."),
            ("Significance", "The importance and relevance of {topic} in its field of study."),
        ],
    }
}

fn examples(category: TopicCategory) -> &'static str {
    match category {
        TopicCategory::Science => "<div class=\"example-box\">\n<h3>Example 1: Real-World Application</h3>\n<p>Consider how {topic} shows up in everyday life, in natural phenomena as well as in technology and medicine.</p>\n</div>\n\n<div class=\"example-box\">\n<h3>Example 2: Laboratory Demonstration</h3>\n<p>In controlled laboratory conditions, {topic} can be demonstrated through experiments that highlight the key mechanisms involved.</p>\n</div>\n\n",
        TopicCategory::History => "<div class=\"example-box\">\n<h3>Historical Example</h3>\n<p>A notable example of {topic} can be seen in specific events that demonstrate its key characteristics and impact on society.</p>\n</div>\n\n<div class=\"example-box\">\n<h3>Comparative Analysis</h3>\n<p>Comparing {topic} with similar historical phenomena helps illustrate its unique features.</p>\n</div>\n\n",
        TopicCategory::Mathematics => "<div class=\"example-box\">\n<h3>Problem Example 1</h3>\n<p>Consider a typical problem involving {topic}. The solution demonstrates the key principles and techniques associated with this concept.</p>\n</div>\n\n<div class=\"example-box\">\n<h3>Problem Example 2</h3>\n<p>A more complex application of {topic} shows how it is used in advanced analysis and real-world problem solving.</p>\n</div>\n\n",
        _ => "<div class=\"example-box\">\n<h3>Practical Example</h3>\n<p>A real-world example of {topic} demonstrates how this concept applies in everyday contexts.</p>\n</div>\n\n<div class=\"example-box\">\n<h3>Case Study</h3>\n<p>Detailed analysis of a specific case involving {topic} provides insight into its practical implications.</p>\n</div>\n\n",
    }
}

fn diagrams(category: TopicCategory) -> &'static str {
    match category {
        TopicCategory::Science => "<div class=\"diagram-description\">\n<h3>Process Diagram</h3>\n<p>A flowchart showing the step-by-step process of {topic}, including inputs, mechanisms, and outputs.</p>\n</div>\n\n<div class=\"diagram-description\">\n<h3>Structural Diagram</h3>\n<p>An illustration of the components and structures involved in {topic} and how they interact.</p>\n</div>\n\n",
        TopicCategory::History => "<div class=\"diagram-description\">\n<h3>Timeline Diagram</h3>\n<p>A chronological representation of key events related to {topic}.</p>\n</div>\n\n<div class=\"diagram-description\">\n<h3>Map Visualization</h3>\n<p>A geographical representation showing the locations and spread of {topic}.</p>\n</div>\n\n",
        TopicCategory::Mathematics => "<div class=\"diagram-description\">\n<h3>Graph Representation</h3>\n<p>A graph showing the behavior and properties of {topic}, including key points and trends.</p>\n</div>\n\n<div class=\"diagram-description\">\n<h3>Geometric Illustration</h3>\n<p>A diagram demonstrating the spatial or structural aspects of {topic}.</p>\n</div>\n\n",
        _ => "<div class=\"diagram-description\">\n<h3>Conceptual Map</h3>\n<p>A concept map showing how the different aspects of {topic} relate to each other.</p>\n</div>\n\n<div class=\"diagram-description\">\n<h3>Process Flow</h3>\n<p>A flowchart illustrating the steps and decision points involved in {topic}.</p>\n</div>\n\n",
    }
}

const SUMMARY: &str = "<h2>Summary and Key Takeaways</h2>\n<p>In conclusion, {topic} is a significant concept that requires a thorough understanding of its fundamental principles, applications, and implications. The key points to remember include:</p>\n<ul>\n<li>Understanding the basic definition and core principles</li>\n<li>Recognizing the practical applications and real-world relevance</li>\n<li>Appreciating the broader context and significance</li>\n<li>Applying the knowledge to solve problems and analyze situations</li>\n</ul>\n\n<p>Mastery of {topic} provides a solid foundation for further study in related fields.</p>\n";
