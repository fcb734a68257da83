//! Game action definitions

/// All player actions that can be triggered by input
///
/// Key mappings:
/// - Left / A  = run left
/// - Right / D = run right
/// - Space     = jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,

    // Edge-triggered
    Jump,
}
