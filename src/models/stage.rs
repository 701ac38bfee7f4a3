use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One step of the production pipeline.
///
/// Stages are ordered. An item's progress is the number of leading stages
/// (in [`Stage::ALL`] order) whose state is done.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Project set up: idea accepted, sponsorship and project details known.
    Initiation,
    /// Recording material captured.
    Material,
    /// Title, description and thumbnails defined.
    Definition,
    /// Edit finished and reviewed.
    Edit,
    /// Uploaded and announced.
    Publish,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Initiation,
        Stage::Material,
        Stage::Definition,
        Stage::Edit,
        Stage::Publish,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Initiation => write!(f, "initiation"),
            Stage::Material => write!(f, "material"),
            Stage::Definition => write!(f, "definition"),
            Stage::Edit => write!(f, "edit"),
            Stage::Publish => write!(f, "publish"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initiation" | "init" => Ok(Stage::Initiation),
            "material" => Ok(Stage::Material),
            "definition" | "define" => Ok(Stage::Definition),
            "edit" => Ok(Stage::Edit),
            "publish" => Ok(Stage::Publish),
            _ => bail!(
                "Invalid stage: {s}. Use: initiation, material, definition, edit, publish"
            ),
        }
    }
}

/// Completion state of a single stage as stored in an item document.
///
/// Serialized untagged so documents read naturally when edited by hand:
///
/// ```yaml
/// initiation: true
/// material:
///   completed: 3
///   total: 5
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StageState {
    Flag(bool),
    /// A counter missing either field reads as zero for it, so a partial
    /// hand edit stays readable and is never done.
    Counter {
        #[serde(default)]
        completed: u32,
        #[serde(default)]
        total: u32,
    },
}

impl Default for StageState {
    fn default() -> Self {
        StageState::Flag(false)
    }
}

impl StageState {
    /// A counter is done only when every task is complete and there is at
    /// least one task. `completed > total` is malformed and never done.
    pub fn is_done(&self) -> bool {
        match *self {
            StageState::Flag(done) => done,
            StageState::Counter { completed, total } => total > 0 && completed == total,
        }
    }

    /// Parse the `completed/total` form accepted on the command line.
    pub fn parse_counter(s: &str) -> anyhow::Result<Self> {
        let Some((completed, total)) = s.split_once('/') else {
            bail!("Invalid progress '{s}'. Expected <completed>/<total>, e.g. 3/5");
        };
        let completed: u32 = completed
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid completed count in '{s}'"))?;
        let total: u32 = total
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid total count in '{s}'"))?;
        if completed > total {
            bail!("Completed count {completed} exceeds total {total}");
        }
        Ok(StageState::Counter { completed, total })
    }
}

impl std::fmt::Display for StageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageState::Flag(true) => write!(f, "done"),
            StageState::Flag(false) => write!(f, "pending"),
            StageState::Counter { completed, total } => write!(f, "{completed}/{total}"),
        }
    }
}

/// Per-stage state of one item, one field per [`Stage`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stages {
    #[serde(default)]
    pub initiation: StageState,
    #[serde(default)]
    pub material: StageState,
    #[serde(default)]
    pub definition: StageState,
    #[serde(default)]
    pub edit: StageState,
    #[serde(default)]
    pub publish: StageState,
}

impl Stages {
    pub fn get(&self, stage: Stage) -> &StageState {
        match stage {
            Stage::Initiation => &self.initiation,
            Stage::Material => &self.material,
            Stage::Definition => &self.definition,
            Stage::Edit => &self.edit,
            Stage::Publish => &self.publish,
        }
    }

    pub fn set(&mut self, stage: Stage, state: StageState) {
        let slot = match stage {
            Stage::Initiation => &mut self.initiation,
            Stage::Material => &mut self.material,
            Stage::Definition => &mut self.definition,
            Stage::Edit => &mut self.edit,
            Stage::Publish => &mut self.publish,
        };
        *slot = state;
    }

    /// Number of leading stages that are done, stopping at the first one
    /// that is not. Always within `0..=5`.
    pub fn progress(&self) -> usize {
        Stage::ALL
            .iter()
            .take_while(|stage| self.get(**stage).is_done())
            .count()
    }
}
