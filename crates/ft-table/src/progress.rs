/// Coarse phase of a table generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    ValidatingConfig,
    QueryingIsotherms,
    Completed,
}

impl GenerationStage {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationStage::ValidatingConfig => "validating",
            GenerationStage::QueryingIsotherms => "querying",
            GenerationStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IsothermProgress {
    pub completed: usize,
    pub total: usize,
    pub temperature_c: f64,
    pub rows: usize,
}

impl IsothermProgress {
    pub fn fraction_complete(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationProgressEvent {
    pub stage: GenerationStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub isotherm: Option<IsothermProgress>,
}
