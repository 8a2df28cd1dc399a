//! Preset summaries from conditional message rules.
//!
//! A game's settings screen shows players a short description of the
//! preset they are about to play: which items moved, which tricks are on,
//! what the objective is. Games declare these lines as a [`MessageTree`]
//! of conditional rules built from their configuration and a
//! [`PresetDescriber`] flattens it into an ordered category -> messages
//! [`Summary`].

use serde::Serialize;

// ============================================================================
// Rule tree
// ============================================================================

/// The condition attached to a rule's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Include the rule's own message when true.
    Leaf(bool),
    /// A data-derived expansion. Each `(message, enabled)` pair is
    /// filtered independently, in order, and replaces the rule's own
    /// message entirely.
    Group(Vec<(String, bool)>),
}

/// An ordered set of conditional messages within one category.
///
/// Rule groups are a multi-select filter: every message whose condition
/// holds is kept, in declared order. Authoring mutually exclusive rules
/// ("A" vs "not A") is the rule author's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleGroup {
    entries: Vec<(String, Condition)>,
}

impl RuleGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message gated by a plain boolean.
    pub fn when(mut self, message: impl Into<String>, enabled: bool) -> Self {
        self.entries.push((message.into(), Condition::Leaf(enabled)));
        self
    }

    /// Add a rule with an explicit [`Condition`], typically a
    /// [`Condition::Group`] built by a helper.
    pub fn with(mut self, message: impl Into<String>, condition: Condition) -> Self {
        self.entries.push((message.into(), condition));
        self
    }

    /// Append every message whose condition holds to `out`.
    fn flatten_into(&self, out: &mut Vec<String>) {
        for (message, condition) in &self.entries {
            match condition {
                Condition::Leaf(true) => out.push(message.clone()),
                Condition::Leaf(false) => {}
                Condition::Group(pairs) => {
                    for (expanded, enabled) in pairs {
                        if *enabled {
                            out.push(expanded.clone());
                        }
                    }
                }
            }
        }
    }
}

/// An ordered tree of categories, each holding rule groups.
///
/// Trees are built fresh for every formatting call from the current
/// configuration; they are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTree {
    categories: Vec<(String, Vec<RuleGroup>)>,
}

impl MessageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category with its rule groups. Repeating a category name
    /// is allowed; its messages merge in declared order when flattened.
    pub fn category(mut self, name: impl Into<String>, groups: Vec<RuleGroup>) -> Self {
        self.categories.push((name.into(), groups));
        self
    }
}

/// Build a [`Condition::Group`] for "expansion X needs its main launcher"
/// style messages.
///
/// `messages` maps each display message to the pickup name it describes;
/// `requires_main` looks that pickup up in the caller's ammo
/// configuration.
pub fn message_for_required_mains<'a, M, F>(messages: M, requires_main: F) -> Condition
where
    M: IntoIterator<Item = (&'a str, &'a str)>,
    F: Fn(&str) -> bool,
{
    Condition::Group(
        messages
            .into_iter()
            .map(|(message, pickup)| (message.to_string(), requires_main(pickup)))
            .collect(),
    )
}

// ============================================================================
// Summary
// ============================================================================

/// Ordered mapping from category name to the messages selected for it.
///
/// Categories appear in first-insertion order; a category referenced by
/// any rule stays present even when every condition was false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    categories: Vec<(String, Vec<String>)>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a category, creating the category if needed.
    pub fn push(&mut self, category: &str, message: impl Into<String>) {
        self.bucket(category).push(message.into());
    }

    /// Messages for a category, if any rule ever referenced it.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Iterate `(category, messages)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Number of categories, including empty ones.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Flatten `tree` into this summary.
    ///
    /// Every category the tree names is registered even when none of its
    /// conditions hold; matching messages append in declared order, with
    /// repeated categories merging rather than replacing.
    pub fn fill_from_tree(&mut self, tree: &MessageTree) {
        for (category, groups) in &tree.categories {
            let bucket = self.bucket(category);
            for group in groups {
                group.flatten_into(bucket);
            }
        }
    }

    fn bucket(&mut self, category: &str) -> &mut Vec<String> {
        if let Some(pos) = self.categories.iter().position(|(name, _)| name == category) {
            &mut self.categories[pos].1
        } else {
            self.categories.push((category.to_string(), Vec::new()));
            &mut self.categories.last_mut().unwrap().1
        }
    }
}

// ============================================================================
// Describer
// ============================================================================

/// Turns a game's configuration into a preset [`Summary`].
///
/// Implementors supply the objective line and the rule trees; the
/// provided [`format_params`](PresetDescriber::format_params) fixes the
/// assembly order: the "Objective" category is seeded first, then the
/// generic base tree, then the game-specific extra tree. A category used
/// by both trees accumulates base messages before extra ones.
pub trait PresetDescriber {
    /// The game's configuration type. Opaque to the engine; rules read
    /// whatever fields they need while building the trees.
    type Config;

    /// One-line objective description, always emitted as the sole entry
    /// of the "Objective" category.
    fn objective(&self, config: &Self::Config) -> String;

    /// Generic rules shared across games. Defaults to empty; a shared
    /// layer overrides this once for all of its games.
    fn base_tree(&self, _config: &Self::Config) -> MessageTree {
        MessageTree::new()
    }

    /// Game-specific rules layered on after the base tree.
    fn extra_tree(&self, config: &Self::Config) -> MessageTree;

    /// Produce the ordered category -> messages summary for `config`.
    fn format_params(&self, config: &Self::Config) -> Summary {
        let mut summary = Summary::new();
        summary.push("Objective", self.objective(config));
        summary.fill_from_tree(&self.base_tree(config));
        summary.fill_from_tree(&self.extra_tree(config));
        summary
    }
}
