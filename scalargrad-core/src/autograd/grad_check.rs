use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used for the central difference.
    pub epsilon: f64,
    /// Absolute tolerance, dominates near zero.
    pub abs_tol: f64,
    /// Relative tolerance.
    pub rel_tol: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tol: 1e-6,
            rel_tol: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_abs_tol(mut self, abs_tol: f64) -> Self {
        self.abs_tol = abs_tol;
        self
    }

    pub fn with_rel_tol(mut self, rel_tol: f64) -> Self {
        self.rel_tol = rel_tol;
        self
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds the function under test on a fresh graph from one leaf per
/// entry of `inputs` and returns the output node. The analytic gradient of
/// every input is compared with `(f(x + eps) - f(x - eps)) / (2 eps)`.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(*leaf)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_shifted(&func, inputs, input_index, config.epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, input_index, -config.epsilon)?;
        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        debug!(
            "check_grad: input {} analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tol,
            max_relative = config.rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

/// Forward value of `func` with input `index` moved by `delta`.
fn evaluate_shifted<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(i, &v)| graph.leaf(if i == index { v + delta } else { v }))
        .collect();
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_passes_for_polynomial() -> Result<(), GradCheckError> {
        // f(x, y) = x^2 * y + y^3
        let func = |g: &mut Graph, x: &[NodeId]| -> Result<NodeId, ScalarGradError> {
            let x2 = g.pow(x[0], 2.0)?;
            let lhs = g.mul(x2, x[1])?;
            let y3 = g.pow(x[1], 3.0)?;
            g.add(lhs, y3)
        };
        check_grad(func, &[2.0, 3.0], &GradCheckConfig::default())
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // The cubic term is computed outside the graph, so the recorded
        // derivative misses it while the forward value includes it.
        let broken = |g: &mut Graph, x: &[NodeId]| -> Result<NodeId, ScalarGradError> {
            let square = g.mul(x[0], x[0])?;
            let x0 = g.value(x[0])?;
            let cubic = g.leaf(x0 * x0 * x0);
            g.add(square, cubic)
        };
        let result = check_grad(broken, &[1.5], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let func = |g: &mut Graph, x: &[NodeId]| g.pow(x[0], x[1]);
        let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(
                ScalarGradError::UnsupportedExponent { .. }
            ))
        ));
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical() {
        let func = |g: &mut Graph, x: &[NodeId]| g.div(1.0, x[0]);
        let result = check_grad(func, &[0.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_config_builders() {
        let cfg = GradCheckConfig::default()
            .with_epsilon(1e-4)
            .with_abs_tol(1e-8)
            .with_rel_tol(1e-3);
        assert_eq!(cfg.epsilon, 1e-4);
        assert_eq!(cfg.abs_tol, 1e-8);
        assert_eq!(cfg.rel_tol, 1e-3);
    }
}
