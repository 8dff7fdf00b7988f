pub mod payload_scatter;
pub mod success_pie;

#[cfg(test)]
mod tests {
    #[test]
    fn test_output_ids_are_distinct() {
        assert_ne!(
            super::success_pie::SUCCESS_PIE_CHART_ID,
            super::payload_scatter::PAYLOAD_SCATTER_CHART_ID
        );
    }
}
