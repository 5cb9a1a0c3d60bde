//! Intent Classification using keyword rules.
//!
//! Maps a free-text utterance to one campus topic by substring matching
//! against an ordered rule table. First matching rule wins; anything left
//! over resolves to [`Category::Fallback`], so classification never fails.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::templates;

/// Topic a user utterance resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Mess menu, meals, food
    Mess,
    /// Classes, timetable, lectures
    Schedule,
    /// Places to eat or study near campus
    Nearby,
    /// Pending assignments and deadlines
    Assignments,
    /// Shared cab rides
    Cabpool,
    /// Lost & found board
    Lostfound,
    /// Hello, hi, hey
    Greeting,
    /// Anything not matched by an earlier rule
    Fallback,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in classification priority order.
    #[allow(dead_code)]
    pub const ALL: [Category; 8] = [
        Category::Mess,
        Category::Schedule,
        Category::Nearby,
        Category::Assignments,
        Category::Cabpool,
        Category::Lostfound,
        Category::Greeting,
        Category::Fallback,
    ];

    /// Returns the serialized label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mess => "mess",
            Category::Schedule => "schedule",
            Category::Nearby => "nearby",
            Category::Assignments => "assignments",
            Category::Cabpool => "cabpool",
            Category::Lostfound => "lostfound",
            Category::Greeting => "greeting",
            Category::Fallback => "fallback",
        }
    }

    /// Canned reply associated with this category
    pub fn template(&self) -> &'static str {
        templates::response_for(*self)
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub category: Category,
    /// Lower-case keywords; any one present as a substring selects the rule.
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// Returns the first keyword found in an already lower-cased input
    fn first_match(&self, normalized: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| normalized.contains(keyword))
    }
}

/// Default rule table. Order is the priority order.
pub const DEFAULT_RULES: [IntentRule; 7] = [
    IntentRule {
        category: Category::Mess,
        keywords: &["mess", "menu", "food", "lunch", "dinner"],
    },
    IntentRule {
        category: Category::Schedule,
        keywords: &["class", "timetable", "schedule", "lecture"],
    },
    IntentRule {
        category: Category::Nearby,
        keywords: &["nearby", "place", "eat", "cafe", "restaurant"],
    },
    IntentRule {
        category: Category::Assignments,
        keywords: &["assignment", "pending", "homework", "due"],
    },
    IntentRule {
        category: Category::Cabpool,
        keywords: &["cab", "ride", "travel", "pool"],
    },
    IntentRule {
        category: Category::Lostfound,
        keywords: &["lost", "found"],
    },
    IntentRule {
        category: Category::Greeting,
        keywords: &["hello", "hi", "hey"],
    },
];

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentResult {
    /// Resolved category
    pub category: Category,
    /// Response template for the category, never empty
    pub response: &'static str,
    /// Keyword that selected the rule, `None` for fallback
    pub matched_keyword: Option<&'static str>,
}

/// Ordered keyword classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the default campus rule table
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Create a classifier from a custom ordered rule list.
    ///
    /// Rules are evaluated in the given order. Fallback is implicit and
    /// always last; a `Fallback` rule in the list would shadow nothing.
    #[allow(dead_code)]
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// The rule table in evaluation order
    #[allow(dead_code)]
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify an utterance. Total: unmatched input resolves to fallback.
    pub fn classify(&self, utterance: &str) -> IntentResult {
        let normalized = utterance.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.first_match(&normalized) {
                return IntentResult {
                    category: rule.category,
                    response: rule.category.template(),
                    matched_keyword: Some(keyword),
                };
            }
        }

        IntentResult {
            category: Category::Fallback,
            response: Category::Fallback.template(),
            matched_keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mess_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("What's today's mess menu?");
        assert_eq!(result.category, Category::Mess);
        assert!(result.response.starts_with("Here's today's mess schedule"));

        let result = classifier.classify("anything good for dinner");
        assert_eq!(result.category, Category::Mess);
        assert_eq!(result.matched_keyword, Some("dinner"));
    }

    #[test]
    fn test_greeting_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("hi");
        assert_eq!(result.category, Category::Greeting);
        assert!(result.response.contains("I can help you with"));

        let result = classifier.classify("Hey there");
        assert_eq!(result.category, Category::Greeting);
    }

    #[test]
    fn test_priority_order() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("What's for lunch before my next class?");
        assert_eq!(result.category, Category::Mess);

        let result = classifier.classify("is the lecture hall near the cab stand");
        assert_eq!(result.category, Category::Schedule);
    }

    #[test]
    fn test_fallback_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.category, Category::Fallback);
        assert_eq!(result.matched_keyword, None);

        let result = classifier.classify("xyz 123");
        assert_eq!(result.category, Category::Fallback);
        assert!(!result.response.is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let classifier = IntentClassifier::with_rules(vec![IntentRule {
            category: Category::Cabpool,
            keywords: &["taxi"],
        }]);

        assert_eq!(classifier.classify("Need a TAXI").category, Category::Cabpool);
        assert_eq!(classifier.classify("mess menu").category, Category::Fallback);
    }
}
