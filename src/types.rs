/// CSV header / logical column name.
/// Examples: `Score`, `HelpfulnessNumerator`, `Text`
pub type ColumnName = String;
/// Identifier for the source that produced a working set.
/// Examples: `reviews.csv`, `in_memory`, `upload`
pub type SourceId = String;
/// Unparsed Unix-timestamp cell, validated during date derivation.
/// Examples: `1303862400`, `not-a-time`
pub type RawTimestamp = String;
/// Short excerpt of a review body used in mismatch examples.
/// Example: `I bought this expecting the best and it broke in a week...`
pub type Excerpt = String;
/// Human-readable interpretation sentence attached to a correlation band.
/// Example: `Longer reviews tend to be more helpful.`
pub type Interpretation = String;
