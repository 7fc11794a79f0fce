use pv_project::Combination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStage {
    Starting,
    EncodingInput,
    RunningEngine,
    DecodingOutput,
    RowAppended,
    SavingReport,
    Completed,
}

impl SweepStage {
    pub fn label(&self) -> &'static str {
        match self {
            SweepStage::Starting => "starting",
            SweepStage::EncodingInput => "encode",
            SweepStage::RunningEngine => "engine",
            SweepStage::DecodingOutput => "decode",
            SweepStage::RowAppended => "append",
            SweepStage::SavingReport => "save",
            SweepStage::Completed => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepProgressEvent {
    pub stage: SweepStage,
    /// Combinations finished so far.
    pub completed: usize,
    pub total: usize,
    pub combination: Option<Combination>,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl SweepProgressEvent {
    pub fn fraction_complete(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}
