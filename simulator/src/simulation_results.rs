use std::time::Instant;
use pi_randomness::{utils::logging, ResultPair, SimulationKind, TransitionMatrix};

/// Everything one run produced, in the order it was computed
#[derive(Debug)]
pub struct SimulationResults {
    // Input
    pub digit_count: usize,

    // Descriptive statistics
    pub transition_matrix: Option<TransitionMatrix>,

    // Simulation outcomes
    pub outcomes: Vec<(SimulationKind, ResultPair)>,

    pub start_time: Instant,
}

// Empty constructor
impl Default for SimulationResults {
    fn default() -> Self {
        Self {
            digit_count: 0,
            transition_matrix: None,
            outcomes: Vec::new(),
            start_time: Instant::now(),
        }
    }
}

impl SimulationResults {
    pub fn record(&mut self, kind: SimulationKind, result: ResultPair) {
        logging::log("SIMULATOR", &format!("{} -> {}", kind, result));
        self.outcomes.push((kind, result));
    }

    pub fn outcome(&self, kind: SimulationKind) -> Option<ResultPair> {
        self.outcomes
            .iter()
            .find(|(recorded, _)| *recorded == kind)
            .map(|(_, result)| *result)
    }

    /// Renders the report: the matrix one row per line, then each labelled result
    pub fn report(&self) -> String {
        let mut out = String::new();
        if let Some(matrix) = &self.transition_matrix {
            out.push_str("Distribution of the digit (columns) that follows each digit (rows)\n");
            out.push_str(&matrix.to_string());
        }
        for (kind, result) in &self.outcomes {
            out.push_str(&format!("{}\n{}\n", kind.label(), result));
        }
        out
    }

    /// Prints the report to stdout
    pub fn print(&self) {
        print!("{}", self.report());
        logging::debug("SIMULATOR", &self.to_json().to_string());
        logging::log(
            "SIMULATOR",
            &format!("Finished in {:.2}s", self.start_time.elapsed().as_secs_f64()),
        );
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "digit_count": self.digit_count,
            "transition_matrix": self.transition_matrix.as_ref().map(|m| m.rows().to_vec()),
            "results": self.outcomes.iter().map(|(kind, result)| {
                serde_json::json!({
                    "simulation": kind.to_string(),
                    "mean": result.mean,
                    "variance": result.variance,
                })
            }).collect::<Vec<_>>()
        })
    }
}
