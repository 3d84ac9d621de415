/// Gallows drawings, from the empty frame (stage 0) to the full figure.
pub const STAGES: [&str; 7] = [
    r"
 +---+
 |   |
     |
     |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
     |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
 |   |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|   |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
     |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
/    |
     |
=========",
    r"
 +---+
 |   |
 O   |
/|\  |
/ \  |
     |
=========",
];

pub const MAX_STAGE: usize = STAGES.len() - 1;

/// Which drawing to show after `mistakes` wrong guesses out of a budget of
/// `starting_attempts`. Integer division, capped at [`MAX_STAGE`].
pub fn stage_index(mistakes: u32, starting_attempts: u32) -> usize {
    if starting_attempts == 0 {
        return MAX_STAGE;
    }
    let stage = mistakes as usize * MAX_STAGE / starting_attempts as usize;
    stage.min(MAX_STAGE)
}

pub fn drawing(stage: usize) -> &'static str {
    STAGES[stage.min(MAX_STAGE)]
}
