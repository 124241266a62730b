use super::*;

#[test]
fn shallow_recursion_is_untouched() {
    fn count_ancestors(generations: u32) -> u32 {
        ensure_sufficient_stack(|| {
            if generations == 0 {
                0
            } else {
                2 + 2 * count_ancestors(generations - 1)
            }
        })
    }

    // 2 parents, 4 grandparents, 8 great-grandparents
    assert_eq!(count_ancestors(3), 14);
}

#[test]
fn deep_recursion_grows_the_stack() {
    // A pedigree walk this deep would overflow a typical 8MB stack.
    fn walk(depth: u64) -> u64 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { walk(depth - 1) + 1 })
    }

    assert_eq!(walk(100_000), 100_000);
}

#[test]
fn result_passes_through() {
    let result: Result<&str, &str> = ensure_sufficient_stack(|| Err("@I1@ not found"));
    assert_eq!(result, Err("@I1@ not found"));
}
