#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateKey {
    pub scenario_name: String,
    pub candidate_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScenarioTotal {
    pub scenario_name: String,
    pub candidate_id: String,
    pub total: f64,
}
