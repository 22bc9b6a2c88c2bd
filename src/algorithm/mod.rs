/// Breadth-first wave fill
pub mod frontier;
/// Access counting, timing and strategy comparison
pub mod instrumentation;
/// Span fill with parent-range tracking
pub mod range_span;
/// Depth-first recursive fill with a stack budget
pub mod recursive;
/// Scanline fill with an explicit point stack
pub mod row_span;
/// Strategy contract, runtime dispatch and fill entry points
pub mod strategy;
/// Fill request validation
pub mod validation;
