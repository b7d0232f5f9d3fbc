//! Property-based tests for the autofix

use proptest::prelude::*;
use tagbox::{Linter, ParseOptions, SUPPORTED_HTML_TAGS, oxc::Allocator, parse};

fn supported_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SUPPORTED_HTML_TAGS.to_vec())
}

fn attribute() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|name| format!("data-{name}=\"v\"")),
        Just("className={styles.x}".to_string()),
        Just("{...rest}".to_string()),
        Just("as=\"div\"".to_string()),
        Just("hidden".to_string()),
    ]
}

fn import_line() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "",
        "import { Flex } from 'gestalt';\n",
        "import { Box } from 'gestalt';\n",
        "import Gestalt from 'gestalt';\n",
        "import * as G from 'gestalt';\n",
        "import 'gestalt';\n",
    ])
}

proptest! {
    #[test]
    fn fix_reaches_a_clean_parseable_fixed_point(
        import in import_line(),
        elements in prop::collection::vec((supported_tag(), prop::collection::vec(attribute(), 0..3), any::<bool>()), 1..5),
    ) {
        let body: String = elements
            .iter()
            .map(|(tag, attrs, self_closing)| {
                let attrs: String = attrs.iter().map(|a| format!(" {a}")).collect();
                if *self_closing {
                    format!("<{tag}{attrs} />")
                } else {
                    format!("<{tag}{attrs}>x</{tag}>")
                }
            })
            .collect();
        let code = format!("{import}const styles = {{}};\nconst rest = {{}};\nexport const C = () => <>{body}</>;\n");

        let linter = Linter::new();
        let before = linter.lint_source("C.jsx", &code).unwrap();
        prop_assert_eq!(before.diagnostics.len(), elements.len());

        let outcome = linter.fix_source("C.jsx", &code).unwrap();
        prop_assert!(outcome.remaining.is_empty());

        let allocator = Allocator::default();
        prop_assert!(parse(&allocator, "C.jsx", &outcome.code, ParseOptions::jsx()).is_ok());

        let again = linter.fix_source("C.jsx", &outcome.code).unwrap();
        prop_assert!(!again.changed);
    }
}
