///
/// One genotype record after id resolution: the id and coordinate as they
/// appear in the genotype file, plus the current id (`None` when the id was
/// deleted from dbSNP).
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct RecordTriple {
    pub snp_id: String,
    pub coordinate: String,
    pub resolved: Option<String>,
}

impl RecordTriple {
    pub fn new(
        snp_id: impl Into<String>,
        coordinate: impl Into<String>,
        resolved: Option<String>,
    ) -> Self {
        RecordTriple {
            snp_id: snp_id.into(),
            coordinate: coordinate.into(),
            resolved,
        }
    }

    /// True when resolution moved the record to a different id.
    pub fn is_merged(&self) -> bool {
        self.resolved
            .as_deref()
            .is_some_and(|resolved| resolved != self.snp_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(RecordTriple::new("rs1", "1:1000", Some("rs2".to_string())), true)]
    #[case(RecordTriple::new("rs1", "1:1000", Some("rs1".to_string())), false)]
    #[case(RecordTriple::new("rs1", "1:1000", None), false)]
    fn test_is_merged(#[case] triple: RecordTriple, #[case] merged: bool) {
        assert_eq!(triple.is_merged(), merged);
    }
}
