mod common;

use common::*;
use srcmodel_core::Model;
use std::thread;

#[test]
fn test_parallel_resolution_agrees() {
    let mut model = Model::default();
    build(
        &mut model,
        vec![
            package("p"),
            import("java.util.List"),
            class("Shared"),
            field("names", generic("List", &["String"])),
            field("local", ty("Shared")),
            field("missing", ty("Nowhere")),
            end_class(),
        ],
    );
    let model = &model;

    let results: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    ["names", "local", "missing"]
                        .iter()
                        .map(|name| {
                            model
                                .field_type(field_id(model, "p.Shared", name))
                                .to_generic_string()
                        })
                        .collect()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(
            result,
            &vec![
                "java.util.List<java.lang.String>".to_string(),
                "p.Shared".to_string(),
                "Nowhere".to_string(),
            ]
        );
    }
}
