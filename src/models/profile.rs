use serde::{Deserialize, Serialize};

/// The persisted user profile. Every field is optional from the start: the
/// profile accretes over onboarding and profile-completion stages, and each
/// stage only writes the fields it collected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub disorder: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub symptom_duration: Option<String>,
    /// Baseline frequent symptoms collected during onboarding.
    pub symptoms: Option<Vec<String>>,
    /// Symptom labels learned over time from free-text analysis.
    pub custom_symptoms: Option<Vec<String>>,
    pub symptom_comment: Option<String>,
    pub avoided_situations: Option<String>,
    pub safety_behaviors: Option<String>,
    pub anxiety_amplifiers: Option<Vec<String>>,
    pub avg_sleep: Option<String>,
    pub triggers_comment: Option<String>,
    pub medical_cardio: Option<String>,
    pub medical_thyroid: Option<String>,
    pub medical_respiratory: Option<String>,
    pub medical_neuro: Option<String>,
    pub medical_substances: Option<String>,
    pub medical_therapy: Option<String>,
    pub medical_report_name: Option<String>,
    /// Built-in tools the user opted out of.
    pub hidden_tool_ids: Option<Vec<String>>,
}

impl UserData {
    /// Shallow merge: fields present in `partial` replace the stored value,
    /// unspecified fields are left untouched. This is the write contract for
    /// every profile-completion stage.
    pub fn merge_from(&mut self, partial: UserData) {
        macro_rules! take_if_set {
            ($($field:ident),* $(,)?) => {
                $(if partial.$field.is_some() {
                    self.$field = partial.$field;
                })*
            };
        }

        take_if_set!(
            disorder,
            name,
            age,
            gender,
            country,
            symptom_duration,
            symptoms,
            custom_symptoms,
            symptom_comment,
            avoided_situations,
            safety_behaviors,
            anxiety_amplifiers,
            avg_sleep,
            triggers_comment,
            medical_cardio,
            medical_thyroid,
            medical_respiratory,
            medical_neuro,
            medical_substances,
            medical_therapy,
            medical_report_name,
            hidden_tool_ids,
        );
    }

    /// Every symptom label the user is already known to have, baseline and
    /// learned, in first-seen order.
    pub fn known_symptoms(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for label in self
            .symptoms
            .iter()
            .flatten()
            .chain(self.custom_symptoms.iter().flatten())
        {
            if !seen.contains(label) {
                seen.push(label.clone());
            }
        }
        seen
    }

    pub fn hidden_tool_ids(&self) -> &[String] {
        self.hidden_tool_ids.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unspecified_fields() {
        let mut stored = UserData {
            name: Some("Kilian".into()),
            symptoms: Some(vec!["Herzklopfen / Herzrasen".into()]),
            ..Default::default()
        };

        stored.merge_from(UserData {
            avg_sleep: Some("6-7".into()),
            ..Default::default()
        });

        assert_eq!(stored.name.as_deref(), Some("Kilian"));
        assert_eq!(stored.avg_sleep.as_deref(), Some("6-7"));
        assert!(stored.symptoms.is_some());
    }

    #[test]
    fn known_symptoms_deduplicates_in_order() {
        let data = UserData {
            symptoms: Some(vec!["A".into(), "B".into()]),
            custom_symptoms: Some(vec!["B".into(), "C".into()]),
            ..Default::default()
        };
        assert_eq!(data.known_symptoms(), vec!["A", "B", "C"]);
    }
}
