use proptest::prelude::*;
use searchdeck::cache::DocumentCache;
use searchdeck::document::Document;

#[derive(Debug, Clone)]
enum Op {
    Set(u8),
    Get(u8),
    Has(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12).prop_map(Op::Set),
        (0u8..12).prop_map(Op::Get),
        (0u8..12).prop_map(Op::Has),
    ]
}

proptest! {
    // Model check against a reference implementation: a plain vector kept in
    // recency order (last element most recently touched).
    #[test]
    fn cache_matches_reference_model(
        cap in 1usize..6,
        ops in prop::collection::vec(op_strategy(), 0..100),
    ) {
        let mut cache = DocumentCache::new(cap);
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Set(k) => {
                    let id = format!("doc-{k}");
                    model.retain(|x| x != &id);
                    model.push(id.clone());
                    if model.len() > cap {
                        model.remove(0);
                    }
                    cache.set(Document::new(id, "text"));
                }
                Op::Get(k) => {
                    let id = format!("doc-{k}");
                    let model_hit = model.iter().any(|x| x == &id);
                    prop_assert_eq!(cache.get(&id).is_some(), model_hit);
                    if model_hit {
                        model.retain(|x| x != &id);
                        model.push(id);
                    }
                }
                Op::Has(k) => {
                    let id = format!("doc-{k}");
                    prop_assert_eq!(cache.has(&id), model.contains(&id));
                }
            }
            prop_assert!(cache.len() <= cap);
            prop_assert_eq!(cache.len(), model.len());
        }

        let mut expected = model;
        expected.reverse();
        prop_assert_eq!(cache.resident_ids(), expected);
    }
}
