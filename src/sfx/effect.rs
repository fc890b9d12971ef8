/// The three clips the game can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Move,
    Rotate,
    LineClear,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Move, SoundEffect::Rotate, SoundEffect::LineClear];

    /// Asset file name inside the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Move => "move.mp3",
            SoundEffect::Rotate => "rotate.mp3",
            SoundEffect::LineClear => "line-clear.mp3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoundEffect::Move => "Move",
            SoundEffect::Rotate => "Rotate",
            SoundEffect::LineClear => "Line clear",
        }
    }
}

impl std::fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = SoundEffect::ALL.iter().map(|e| e.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_line_clear_asset() {
        assert_eq!(SoundEffect::LineClear.file_name(), "line-clear.mp3");
        assert_eq!(SoundEffect::LineClear.to_string(), "Line clear");
    }
}
