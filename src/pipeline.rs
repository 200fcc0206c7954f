//! Parsed command-line data model.

use serde::Serialize;

/// One command's argument vector within a pipeline, as delimited by
/// unquoted pipe characters.
///
/// Arguments are fully quote-removed and escape-resolved; an argument may
/// be the empty string if it was built entirely from empty quote pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stage {
    args: Vec<String>,
}

impl Stage {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// The ordered argument strings of this stage.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// True for a stage with no arguments (empty or all-whitespace input).
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

/// The ordered list of stages produced from one input line.
///
/// Always contains at least one stage; an empty line yields one stage with
/// zero arguments. Serializes as an array of arrays of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// The ordered stages, first to last.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn into_stages(self) -> Vec<Stage> {
        self.stages
    }
}

impl IntoIterator for Pipeline {
    type Item = Stage;
    type IntoIter = std::vec::IntoIter<Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_accessors() {
        let stage = Stage::new(vec!["ls".to_string(), "-la".to_string()]);
        assert_eq!(stage.args(), &["ls".to_string(), "-la".to_string()]);
        assert!(!stage.is_empty());
        assert_eq!(stage.into_args(), vec!["ls", "-la"]);
    }

    #[test]
    fn test_empty_stage() {
        let stage = Stage::new(vec![]);
        assert!(stage.is_empty());
    }

    #[test]
    fn test_pipeline_iteration() {
        let pipeline = Pipeline::new(vec![
            Stage::new(vec!["a".to_string()]),
            Stage::new(vec!["b".to_string()]),
        ]);
        assert_eq!(pipeline.len(), 2);
        let commands: Vec<&str> = (&pipeline)
            .into_iter()
            .map(|s| s.args()[0].as_str())
            .collect();
        assert_eq!(commands, vec!["a", "b"]);
    }

    #[test]
    fn test_serialize_transparent() {
        let pipeline = Pipeline::new(vec![
            Stage::new(vec!["grep".to_string(), "foo bar".to_string()]),
            Stage::new(vec![String::new()]),
        ]);
        let json = serde_json::to_string(&pipeline).unwrap();
        assert_eq!(json, r#"[["grep","foo bar"],[""]]"#);
    }
}
