/// Edge weight type
pub type Weight = i64;
/// External node identifier as it appears in the input description
pub type NodeId = i64;
