use std::collections::HashMap;

use crate::catalog::{builtin_tools, Context, Tag, Tool};

/// SUDS improvement ratio above which a tool's tags are reinforced.
const REINFORCE_THRESHOLD: f64 = 0.25;
const REINFORCE_FACTOR: f64 = 1.1;

/// Suggests tools for a situation and time budget, weighted by which tags
/// have helped the user before. The weight table is owned state, constructed
/// once per session and mutated only through `reinforce`.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: HashMap<Tag, f64>,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    fn weight(&self, tag: Tag) -> f64 {
        self.weights.get(&tag).copied().unwrap_or(1.0)
    }

    fn score(&self, tool: &Tool) -> f64 {
        tool.tags.iter().map(|&tag| self.weight(tag)).sum()
    }

    /// Top `max_items` tools that fit the context and the available minutes,
    /// best tag score first.
    pub fn recommend(&self, context: Context, available_minutes: u32, max_items: usize) -> Vec<Tool> {
        let mut scored: Vec<(f64, Tool)> = builtin_tools()
            .into_iter()
            .filter(|tool| {
                tool.contexts.contains(&context) && tool.duration_minutes <= available_minutes
            })
            .map(|tool| (self.score(&tool), tool))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(max_items)
            .map(|(_, tool)| tool)
            .collect()
    }

    /// Strengthen a tool's tags after a session whose SUDS improvement
    /// exceeded the threshold. Smaller improvements leave the table as is.
    pub fn reinforce(&mut self, tool: &Tool, improvement: f64) {
        if improvement <= REINFORCE_THRESHOLD {
            return;
        }
        for &tag in &tool.tags {
            let weight = self.weights.entry(tag).or_insert(1.0);
            *weight *= REINFORCE_FACTOR;
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_by_id(id: &str) -> Tool {
        builtin_tools().into_iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn recommendations_respect_context_and_duration() {
        let recommender = Recommender::new();

        let tools = recommender.recommend(Context::Akut, 3, 10);
        assert!(!tools.is_empty());
        for tool in &tools {
            assert!(tool.contexts.contains(&Context::Akut));
            assert!(tool.duration_minutes <= 3);
        }
        // The 7-minute grounding exercise does not fit a 3-minute window.
        assert!(tools.iter().all(|t| t.id != "54321_7"));
    }

    #[test]
    fn max_items_caps_the_result() {
        let recommender = Recommender::new();
        assert!(recommender.recommend(Context::Akut, 15, 2).len() <= 2);
    }

    #[test]
    fn reinforced_tags_float_their_tools_to_the_top() {
        let mut recommender = Recommender::new();
        let stopp = tool_by_id("gedanken_stopp_3");

        // Repeated strong improvements make Vermeidung-tagged tools outrank
        // the multi-tag breathing exercises.
        for _ in 0..20 {
            recommender.reinforce(&stopp, 0.5);
        }

        let top = recommender.recommend(Context::Unterwegs, 15, 1);
        assert_eq!(top[0].id, "gedanken_stopp_3");
    }

    #[test]
    fn small_improvement_does_not_reinforce() {
        let mut recommender = Recommender::new();
        let tool = tool_by_id("atem_3");
        recommender.reinforce(&tool, 0.1);
        assert!(recommender.weights.is_empty());
    }
}
