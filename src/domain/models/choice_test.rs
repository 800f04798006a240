use super::cycle;
use crate::domain::models::AiContentType;
use crate::domain::models::Level;

#[test]
fn it_cycles_forward() {
    assert_eq!(cycle(Level::One, true), Level::Two);
    assert_eq!(cycle(Level::Two, true), Level::Three);
}

#[test]
fn it_wraps_forward() {
    assert_eq!(cycle(Level::Three, true), Level::One);
}

#[test]
fn it_wraps_backward() {
    assert_eq!(cycle(AiContentType::Exercises, false), AiContentType::Quiz);
    assert_eq!(
        cycle(AiContentType::Quiz, false),
        AiContentType::Explanation
    );
}
