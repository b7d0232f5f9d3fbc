//! Text-edit composers for the element rename and the import repair.
//!
//! Edits are kept as small as possible: renaming touches only the tag names
//! and the attribute list is never rewritten wholesale, so the user's
//! formatting survives and nested violations never produce overlapping edits.

use oxc_ast::ast::{JSXAttributeItem, JSXAttributeName, JSXElement};
use oxc_span::{GetSpan, Span};
use tracing::debug;

use crate::ast_helpers::{ImportHandle, ImportShape, ProgramHandle, source_slice};
use crate::diagnostic::TextEdit;

/// A JSX property to add to the rewritten element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxProp {
    pub name: String,
    /// Rendered property, e.g. `as="header"`
    pub text: String,
}

impl JsxProp {
    /// A string-valued property: `name="value"`
    pub fn string(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            text: format!("{name}=\"{value}\""),
        }
    }
}

/// Rename `element` to `component` and add `prop` to it.
///
/// Existing properties keep their text and order; `prop` goes after the last
/// one. If the element already carries a property with the same name, that
/// property is replaced in place so the element ends up with exactly one,
/// unless a spread follows it: then it is removed and `prop` is appended
/// after the spread so nothing can override it.
pub fn compose_element_rewrite(
    source_text: &str,
    element: &JSXElement<'_>,
    component: &str,
    prop: &JsxProp,
) -> Vec<TextEdit> {
    let opening = &element.opening_element;
    let name_span = opening.name.span();
    let mut edits = vec![TextEdit::replace(name_span, component)];

    // JSX gives the last duplicate attribute precedence, so that is the one to replace
    let attributes = &opening.attributes;
    let colliding = attributes
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, item)| match item {
            JSXAttributeItem::Attribute(attr) => match &attr.name {
                JSXAttributeName::Identifier(ident) if ident.name.as_str() == prop.name => {
                    Some((index, attr.span))
                }
                _ => None,
            },
            JSXAttributeItem::SpreadAttribute(_) => None,
        });
    let after_last = attributes
        .last()
        .map_or(name_span.end, |item| item.span().end);

    match colliding {
        // A later spread could override the property, so it moves to the end
        Some((index, span))
            if attributes[index + 1..]
                .iter()
                .any(|item| matches!(item, JSXAttributeItem::SpreadAttribute(_))) =>
        {
            let removal_start = match index {
                0 => name_span.end,
                _ => attributes[index - 1].span().end,
            };
            debug!(
                removed = source_slice(source_text, span),
                with = %prop.text,
                "moving existing property after spread"
            );
            edits.push(TextEdit::replace(Span::new(removal_start, span.end), ""));
            edits.push(TextEdit::insert(after_last, format!(" {}", prop.text)));
        }
        Some((_, span)) => {
            debug!(
                replaced = source_slice(source_text, span),
                with = %prop.text,
                "replacing existing property"
            );
            edits.push(TextEdit::replace(span, prop.text.as_str()));
        }
        None => {
            edits.push(TextEdit::insert(after_last, format!(" {}", prop.text)));
        }
    }

    if let Some(closing) = &element.closing_element {
        edits.push(TextEdit::replace(closing.name.span(), component));
    }

    edits
}

/// Bring `component` into scope from `module`.
///
/// With no matched import a fresh statement is inserted before the first
/// statement of the program. Otherwise the matched import is extended in the
/// least invasive way its shape allows. Returns no edits when the component
/// is already imported under its own name.
pub fn compose_import_rewrite(
    program: &ProgramHandle,
    matched: Option<&ImportHandle>,
    component: &str,
    module: &str,
) -> Vec<TextEdit> {
    let Some(import) = matched else {
        return vec![TextEdit::insert(
            program.insert_at,
            format!("import {{ {component} }} from '{module}';\n"),
        )];
    };

    if import.imports(component) {
        return Vec::new();
    }

    match &import.shape {
        ImportShape::Named {
            specifiers,
            separator,
        } => {
            // A value specifier supersedes `type Box`, which would clash with it
            if let Some(type_only) = specifiers
                .iter()
                .find(|spec| spec.is_type && spec.local == component)
            {
                return vec![TextEdit::replace(type_only.span, component)];
            }

            // Existing specifiers are never touched; the new one goes before the
            // first specifier that sorts after it
            let position = specifiers
                .iter()
                .position(|spec| spec.imported.as_str() > component);
            let edit = match position {
                Some(0) => TextEdit::insert(
                    specifiers[0].span.start,
                    format!("{component}{separator}"),
                ),
                Some(index) => TextEdit::insert(
                    specifiers[index - 1].span.end,
                    format!("{separator}{component}"),
                ),
                None => {
                    let end = specifiers.last().map_or(import.span.start, |spec| spec.span.end);
                    TextEdit::insert(end, format!("{separator}{component}"))
                }
            };
            vec![edit]
        }
        ImportShape::DefaultOnly { default_end } => {
            vec![TextEdit::insert(*default_end, format!(", {{ {component} }}"))]
        }
        ImportShape::Namespace => vec![TextEdit::insert(
            import.span.end,
            format!("\nimport {{ {component} }} from {};", import.source_raw),
        )],
        ImportShape::Bare => vec![TextEdit::replace(
            import.span,
            format!("import {{ {component} }} from {};", import.source_raw),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply_edits;
    use crate::parser::{ParseOptions, parse};
    use oxc_allocator::Allocator;
    use oxc_ast::ast::{Expression, Statement};

    /// Rewrite the first top-level JSX expression statement of `code`
    fn rewrite_first_element(code: &str, prop: &JsxProp) -> String {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "test.jsx", code, ParseOptions::jsx()).unwrap();
        let element = parsed
            .ast()
            .body
            .iter()
            .find_map(|stmt| match stmt {
                Statement::ExpressionStatement(expr) => match &expr.expression {
                    Expression::JSXElement(element) => Some(element),
                    _ => None,
                },
                _ => None,
            })
            .expect("source has a JSX element");

        let edits = compose_element_rewrite(code, element, "Box", prop);
        apply_edits(code, &edits).unwrap()
    }

    fn import_edits(code: &str) -> String {
        import_edits_with(code, ParseOptions::jsx())
    }

    fn import_edits_with(code: &str, options: ParseOptions) -> String {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "test.tsx", code, options).unwrap();
        let program = ProgramHandle::from_program(parsed.ast());
        let matched = parsed.ast().body.iter().find_map(|stmt| match stmt {
            Statement::ImportDeclaration(decl)
                if crate::ast_helpers::import_matches_path(decl, "gestalt") =>
            {
                Some(ImportHandle::from_declaration(decl, code))
            }
            _ => None,
        });

        let edits = compose_import_rewrite(&program, matched.as_ref(), "Box", "gestalt");
        apply_edits(code, &edits).unwrap()
    }

    #[test]
    fn test_prop_text() {
        let prop = JsxProp::string("as", "header");
        assert_eq!(prop.name, "as");
        assert_eq!(prop.text, "as=\"header\"");
    }

    #[test]
    fn test_rename_appends_prop_after_existing_ones() {
        let prop = JsxProp::string("as", "header");
        assert_eq!(
            rewrite_first_element("<header data-id=\"1\">x</header>;", &prop),
            "<Box data-id=\"1\" as=\"header\">x</Box>;"
        );
    }

    #[test]
    fn test_rename_without_attributes() {
        let prop = JsxProp::string("as", "nav");
        assert_eq!(
            rewrite_first_element("<nav>links</nav>;", &prop),
            "<Box as=\"nav\">links</Box>;"
        );
    }

    #[test]
    fn test_rename_self_closing() {
        let prop = JsxProp::string("as", "aside");
        assert_eq!(
            rewrite_first_element("<aside className=\"x\" />;", &prop),
            "<Box className=\"x\" as=\"aside\" />;"
        );
    }

    #[test]
    fn test_rename_after_spread() {
        let prop = JsxProp::string("as", "main");
        assert_eq!(
            rewrite_first_element("<main {...props}>x</main>;", &prop),
            "<Box {...props} as=\"main\">x</Box>;"
        );
    }

    #[test]
    fn test_rename_keeps_multiline_formatting() {
        let prop = JsxProp::string("as", "footer");
        let code = "<footer\n  id=\"f\"\n  role=\"contentinfo\"\n>\n  x\n</footer>;";
        assert_eq!(
            rewrite_first_element(code, &prop),
            "<Box\n  id=\"f\"\n  role=\"contentinfo\" as=\"footer\"\n>\n  x\n</Box>;"
        );
    }

    #[test]
    fn test_colliding_prop_is_replaced_in_place() {
        let prop = JsxProp::string("as", "section");
        assert_eq!(
            rewrite_first_element("<section as=\"div\" id=\"s\">x</section>;", &prop),
            "<Box as=\"section\" id=\"s\">x</Box>;"
        );
    }

    #[test]
    fn test_colliding_prop_moves_after_later_spread() {
        let prop = JsxProp::string("as", "nav");
        assert_eq!(
            rewrite_first_element("<nav as=\"div\" {...props} />;", &prop),
            "<Box {...props} as=\"nav\" />;"
        );
        assert_eq!(
            rewrite_first_element("<nav id=\"n\" as=\"div\" {...props}>x</nav>;", &prop),
            "<Box id=\"n\" {...props} as=\"nav\">x</Box>;"
        );
    }

    #[test]
    fn test_colliding_prop_after_spread_stays_in_place() {
        let prop = JsxProp::string("as", "nav");
        assert_eq!(
            rewrite_first_element("<nav {...props} as=\"div\" />;", &prop),
            "<Box {...props} as=\"nav\" />;"
        );
    }

    #[test]
    fn test_new_import_is_inserted_before_first_statement() {
        assert_eq!(
            import_edits("import React from 'react';\nconst a = <nav />;"),
            "import { Box } from 'gestalt';\nimport React from 'react';\nconst a = <nav />;"
        );
    }

    #[test]
    fn test_named_import_gets_sorted_specifier() {
        assert_eq!(
            import_edits("import { Text, Flex as F } from 'gestalt';"),
            "import { Box, Text, Flex as F } from 'gestalt';"
        );
        assert_eq!(
            import_edits("import { Flex, Text } from 'gestalt';"),
            "import { Box, Flex, Text } from 'gestalt';"
        );
        assert_eq!(
            import_edits("import { Avatar, Flex } from 'gestalt';"),
            "import { Avatar, Box, Flex } from 'gestalt';"
        );
        assert_eq!(
            import_edits("import { Avatar } from 'gestalt';"),
            "import { Avatar, Box } from 'gestalt';"
        );
    }

    #[test]
    fn test_named_import_keeps_comments() {
        assert_eq!(
            import_edits("import { Flex /* layout */, Text } from 'gestalt';"),
            "import { Box, Flex /* layout */, Text } from 'gestalt';"
        );
        assert_eq!(
            import_edits("import { Avatar, // people\n  Text } from 'gestalt';"),
            "import { Avatar, Box, // people\n  Text } from 'gestalt';"
        );
    }

    #[test]
    fn test_multiline_named_import_keeps_layout() {
        assert_eq!(
            import_edits("import {\n  Flex,\n  Text,\n} from 'gestalt';\n"),
            "import {\n  Box,\n  Flex,\n  Text,\n} from 'gestalt';\n"
        );
        assert_eq!(
            import_edits("import {\n  Avatar,\n  Text,\n} from 'gestalt';\n"),
            "import {\n  Avatar,\n  Box,\n  Text,\n} from 'gestalt';\n"
        );
    }

    #[test]
    fn test_named_import_with_default() {
        assert_eq!(
            import_edits("import G, { Flex } from \"gestalt\";"),
            "import G, { Box, Flex } from \"gestalt\";"
        );
    }

    #[test]
    fn test_existing_box_import_needs_no_edit() {
        let code = "import { Box, Flex } from 'gestalt';";
        assert_eq!(import_edits(code), code);
    }

    #[test]
    fn test_inline_type_box_is_upgraded_to_value() {
        assert_eq!(
            import_edits_with(
                "import { type Box, type BoxProps } from 'gestalt';",
                ParseOptions::tsx()
            ),
            "import { Box, type BoxProps } from 'gestalt';"
        );
    }

    #[test]
    fn test_default_only_import() {
        assert_eq!(
            import_edits("import Gestalt from 'gestalt';"),
            "import Gestalt, { Box } from 'gestalt';"
        );
    }

    #[test]
    fn test_namespace_import_gets_sibling_import() {
        assert_eq!(
            import_edits("import * as G from 'gestalt';\nconst a = 1;"),
            "import * as G from 'gestalt';\nimport { Box } from 'gestalt';\nconst a = 1;"
        );
    }

    #[test]
    fn test_bare_import_keeps_quote_style() {
        assert_eq!(
            import_edits("import \"gestalt\";"),
            "import { Box } from \"gestalt\";"
        );
        assert_eq!(
            import_edits("import {} from 'gestalt'"),
            "import { Box } from 'gestalt';"
        );
    }
}
