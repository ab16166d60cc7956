#[cfg(test)]
mod tests {
    use crate::builder::ReflectionBuilder;
    use crate::report::render_summary;
    use crate::tests::skill_incidence;

    use smartcore::linalg::basic::matrix::DenseMatrix;

    #[test]
    fn test_summary_reports_dimensions_and_rep() {
        let outcome = ReflectionBuilder::new()
            .with_iterations(4)
            .build(&skill_incidence())
            .unwrap();
        let summary = render_summary(&outcome, None, None);

        assert!(summary.contains("Computation Completed Successfully"));
        assert!(summary.contains("M :            3"));
        assert!(summary.contains("N :            3"));
        assert!(summary.contains("rep :            4"));
        assert!(summary.contains("rep-1 :            3"));
    }

    #[test]
    fn test_summary_uses_labels_when_given() {
        let outcome = ReflectionBuilder::new()
            .with_iterations(2)
            .build(&skill_incidence())
            .unwrap();
        let rows = vec!["engineering".to_string(), "design".to_string(), "ops".to_string()];
        let cols = vec!["build".to_string(), "review".to_string(), "deploy".to_string()];
        let summary = render_summary(&outcome, Some(&rows), Some(&cols));

        for name in rows.iter().chain(cols.iter()) {
            assert!(summary.contains(name.as_str()), "missing label {name}");
        }
    }

    #[test]
    fn test_summary_truncates_long_histories() {
        // 12 row entities: head shows 10 and notes the remainder. Varied
        // zero patterns keep the diversity seeds non-constant.
        let mut rows = Vec::new();
        for i in 0..12 {
            let last = if i % 2 == 0 { 0.0 } else { 3.0 };
            rows.push(vec![1.0 + i as f64, 2.0, last]);
        }
        let incidence = DenseMatrix::from_2d_vec(&rows).unwrap();
        let outcome = ReflectionBuilder::new()
            .with_iterations(2)
            .build(&incidence)
            .unwrap();
        let summary = render_summary(&outcome, None, None);
        assert!(summary.contains("2 more rows"));
    }
}
