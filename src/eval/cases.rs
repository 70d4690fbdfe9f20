//! Built-in test cases with hand-authored ground truth.
//!
//! Three short BPMN process descriptions covering the three element
//! kinds (tasks, gateways, events). Ground-truth order matters: the
//! greedy matcher consumes labels first-match-in-order.

use serde::{Deserialize, Serialize};

/// One evaluation input: a process description plus its expected labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Display name for the report row.
    pub name: String,
    /// Natural-language process description sent to the model.
    pub text: String,
    /// Expected element labels, in authoring order. Never mutated.
    pub ground_truth: Vec<String>,
}

impl TestCase {
    /// Create a test case from borrowed parts.
    #[must_use]
    pub fn new(name: &str, text: &str, ground_truth: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            ground_truth: ground_truth.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// The three fixed evaluation cases.
#[must_use]
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(
            "Case 1: Passenger Security",
            "First, the Passenger shows boarding pass. Then the Passenger goes to security check. \
             The officer decides if the passenger is Suspicious? \
             If yes, the Passenger is checked manually. \
             Finally, the Passenger goes to the gate.",
            &[
                "Passenger shows boarding pass",
                "Passenger goes to security check",
                "Suspicious?",
                "Passenger is checked manually",
                "Passenger goes to gate",
            ],
        ),
        TestCase::new(
            "Case 2: Order Processing",
            "An Order is received. The system Checks stock availability. \
             If stock is available?, the order is Shipped. \
             If not, an Error Email is sent. \
             The process ends when the order is fulfilled.",
            &[
                "Order is received",
                "Checks stock availability",
                "stock is available?",
                "Shipped",
                "Error Email is sent",
                "order is fulfilled",
            ],
        ),
        TestCase::new(
            "Case 3: Loan Application",
            "The client submits a loan application. The bank Assess credit risk. \
             Is the risk acceptable? If yes, Approve Loan. \
             If no, Reject Loan.",
            &[
                "submits a loan application",
                "Assess credit risk",
                "Is the risk acceptable?",
                "Approve Loan",
                "Reject Loan",
            ],
        ),
    ]
}
