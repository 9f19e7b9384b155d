use fixity_core::FixityChecker;

pub fn run_agent(checker: &FixityChecker) {
    println!("algorithm: {}", checker.algorithm_name());
    println!("agent: {}", checker.agent());
}
