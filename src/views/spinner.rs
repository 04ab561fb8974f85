use std::time::Instant;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MILLIS: u128 = 80;

/// Braille spinner frame for a load that began at `start`.
pub fn spinner_frame(start: Option<Instant>) -> &'static str {
    let elapsed = start.map(|s| s.elapsed().as_millis()).unwrap_or(0);
    FRAMES[(elapsed / FRAME_MILLIS) as usize % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_without_start() {
        assert_eq!(spinner_frame(None), "⠋");
    }

    #[test]
    fn frame_is_always_from_set() {
        let frame = spinner_frame(Some(Instant::now()));
        assert!(FRAMES.contains(&frame));
    }
}
