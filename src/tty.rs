use is_terminal::IsTerminal;

/// Colors make sense only when stdout is an interactive terminal
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
