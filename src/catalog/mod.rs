mod builtin;

pub use builtin::{builtin_tools, MOTIVATIONAL_QUOTES, SYMPTOM_OPTIONS};

use serde::{Deserialize, Serialize};

use crate::models::{CustomExercise, UserData};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    Panikattacke,
    Exposition,
    Atemtraining,
    Vermeidung,
    Suds,
    Schlaf,
    Koerperfokus,
}

/// Situations a tool is suited for; used by the recommender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Context {
    Morgen,
    Unterwegs,
    Abend,
    Akut,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToolCategory {
    Beruhigen,
    Fokussieren,
    Staerken,
    Verstehen,
}

/// A built-in guided exercise. `title` is the user-facing phrasing, `subtitle`
/// the clinical name shown in plans and history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub category: ToolCategory,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub duration_minutes: u32,
    pub tags: Vec<Tag>,
    pub contexts: Vec<Context>,
    pub steps: Vec<String>,
}

/// One entry of the merged plannable set: either a visible built-in tool or a
/// user-created custom exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannableExercise {
    Tool(Tool),
    Custom(CustomExercise),
}

impl PlannableExercise {
    pub fn id(&self) -> &str {
        match self {
            PlannableExercise::Tool(tool) => &tool.id,
            PlannableExercise::Custom(exercise) => &exercise.id,
        }
    }

    /// Built-ins are listed under their clinical subtitle, custom exercises
    /// under their title.
    pub fn display_title(&self) -> &str {
        match self {
            PlannableExercise::Tool(tool) => &tool.subtitle,
            PlannableExercise::Custom(exercise) => &exercise.title,
        }
    }
}

/// Built-in tools minus the user's hidden ids, followed by all custom
/// exercises. Recomputed on demand so it always reflects the latest profile
/// and custom-exercise state.
pub fn visible_exercises(
    user_data: &UserData,
    custom_exercises: &[CustomExercise],
) -> Vec<PlannableExercise> {
    let hidden = user_data.hidden_tool_ids();
    builtin_tools()
        .into_iter()
        .filter(|tool| !hidden.contains(&tool.id))
        .map(PlannableExercise::Tool)
        .chain(
            custom_exercises
                .iter()
                .cloned()
                .map(PlannableExercise::Custom),
        )
        .collect()
}

/// Title lookup across the full merged set (hidden tools included, so
/// historical entries keep their names). Unknown ids echo back unchanged.
pub fn display_title(id: &str, custom_exercises: &[CustomExercise]) -> String {
    if let Some(tool) = builtin_tools().into_iter().find(|t| t.id == id) {
        return tool.subtitle;
    }
    if let Some(exercise) = custom_exercises.iter().find(|e| e.id == id) {
        return exercise.title.clone();
    }
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_tools_are_filtered_custom_appended() {
        let user_data = UserData {
            hidden_tool_ids: Some(vec!["atem_3".into(), "handschalen".into()]),
            ..Default::default()
        };
        let custom = vec![CustomExercise {
            id: "custom_1".into(),
            title: "Spaziergang".into(),
        }];

        let merged = visible_exercises(&user_data, &custom);
        assert!(merged.iter().all(|e| e.id() != "atem_3"));
        assert!(merged.iter().all(|e| e.id() != "handschalen"));
        assert_eq!(merged.last().unwrap().id(), "custom_1");
        assert_eq!(merged.len(), builtin_tools().len() - 2 + 1);
    }

    #[test]
    fn display_title_prefers_subtitle_then_custom_then_raw_id() {
        let custom = vec![CustomExercise {
            id: "custom_1".into(),
            title: "Spaziergang".into(),
        }];

        assert_eq!(display_title("atem_3", &custom), "3-Minuten-Atemanker");
        assert_eq!(display_title("custom_1", &custom), "Spaziergang");
        assert_eq!(display_title("deleted_id", &custom), "deleted_id");
    }

    #[test]
    fn hidden_tools_still_resolve_titles() {
        // Title lookup ignores visibility so history stays readable.
        assert_eq!(display_title("atem_3", &[]), "3-Minuten-Atemanker");
    }
}
