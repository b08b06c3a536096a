/// Variable binding parsing.
///
/// Converts `NAME=BIT` strings, as given on the command line, into a
/// `Bindings` map, rejecting malformed entries and duplicate names.
pub mod binding;
