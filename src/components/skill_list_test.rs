use super::*;

#[test]
fn reveal_delay_steps_by_a_tenth_of_a_second() {
    assert_eq!(reveal_delay(0), "0.0s");
    assert_eq!(reveal_delay(1), "0.1s");
    assert_eq!(reveal_delay(7), "0.7s");
    assert_eq!(reveal_delay(12), "1.2s");
}

#[test]
fn kinds_have_distinct_titles_and_styles() {
    assert_eq!(SkillKind::Matching.title(), "Matching Skills");
    assert_eq!(SkillKind::Missing.title(), "Missing Skills");
    assert_ne!(SkillKind::Matching.css_modifier(), SkillKind::Missing.css_modifier());
}
