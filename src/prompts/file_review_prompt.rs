pub const MAX_POINTS_PER_CATEGORY: usize = 3;

pub const FILE_REVIEW_INSTRUCTIONS: &str = r#"Provide a list of up to {max} good aspects, up to {max} bad aspects, and up to {max} potential improvements.
Respond with a single JSON object and nothing else, using exactly this shape:
{ "good": ["point1", "point2", "point3"], "bad": ["point1", "point2", "point3"], "improvements": ["point1", "point2", "point3"] }"#;
