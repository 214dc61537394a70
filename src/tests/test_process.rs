use crate::process::ProcessContext;

#[test]
fn test_rank_zero_is_main() {
    let ctx = ProcessContext::new(0, 4).unwrap();
    assert!(ctx.is_main_process());
    assert_eq!(ctx.rank(), 0);
    assert_eq!(ctx.world_size(), 4);
}

#[test]
fn test_nonzero_ranks_are_not_main() {
    for rank in 1..4 {
        let ctx = ProcessContext::new(rank, 4).unwrap();
        assert!(!ctx.is_main_process());
    }
}

#[test]
fn test_single_process_job_is_main() {
    let ctx = ProcessContext::single();
    assert!(ctx.is_main_process());
    assert_eq!(ctx.world_size(), 1);
}

#[test]
fn test_default_is_single() {
    assert_eq!(ProcessContext::default(), ProcessContext::single());
}

#[test]
fn test_zero_world_size_rejected() {
    assert!(ProcessContext::new(0, 0).is_err());
}

#[test]
fn test_rank_out_of_range_rejected() {
    assert!(ProcessContext::new(4, 4).is_err());
    assert!(ProcessContext::new(7, 2).is_err());
}
