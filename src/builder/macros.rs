//! Macros for ergonomic machine configuration.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a table literal.
///
/// Each state lists its transitions as `event => target` pairs. States keep
/// the order they are written in.
///
/// # Example
///
/// ```
/// use fsm_lite::fsm_config;
///
/// let config = fsm_config! {
///     initial: "normal",
///     states: {
///         "normal" => { "study" => "busy", "sleep" => "sleeping" },
///         "busy" => { "get_tired" => "sleeping" },
///         "sleeping" => { "get_up" => "normal" },
///         "idle" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.states.len(), 4);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $($event:expr => $target:expr),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateTable::new();
        $(
            states.insert(
                $state,
                $crate::core::StateDef::new()$(.on($event, $target))*,
            );
        )*
        $crate::config::MachineConfig::new($initial, states)
    }};
}
