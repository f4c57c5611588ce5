//! Text substitution grammar for the scaffold templates.
//!
//! Two token kinds: scalar placeholders `\[name\]`, replaced once with a
//! single value, and block placeholders `\{name\}`, replaced with a
//! list-driven multi-line expansion. Tokens without a supplied value are left
//! untouched so a later pass can own them; malformed token syntax is literal
//! text.

use regex::Regex;

fn scalar_token() -> Regex {
    Regex::new(r"\\\[([A-Za-z_][A-Za-z0-9_]*)\\\]").unwrap()
}

fn block_token() -> Regex {
    Regex::new(r"\\\{([A-Za-z_][A-Za-z0-9_]*)\\\}").unwrap()
}

/// Replaces every occurrence of each named scalar placeholder with its value.
///
/// Values are inserted verbatim in a single pass, so placeholder syntax inside
/// a value is never re-expanded.
pub fn insert(template: &str, values: &[(&str, String)]) -> String {
    let re = scalar_token();
    re.replace_all(template, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => value.clone(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// Expands a fragment once per list element, substituting the fragment's
/// scalar placeholder with the element. Concatenated in list order with no
/// separator beyond the fragment's own trailing characters; an empty list
/// yields the empty string.
pub fn insert_loop(fragment: &str, name: &str, values: &[String]) -> String {
    let mut expanded = String::new();
    for value in values {
        expanded.push_str(&insert(fragment, &[(name, value.clone())]));
    }
    expanded
}

/// Substitutes named multi-line blocks at their block placeholders,
/// re-indenting every continuation line to the column at which the
/// placeholder appeared in the parent. Unknown block placeholders are left
/// untouched.
pub fn indent_merge(parent: &str, blocks: &[(&str, &str)]) -> String {
    let re = block_token();
    let mut out: Vec<String> = Vec::new();

    for line in parent.split('\n') {
        let token = re.captures_iter(line).find_map(|caps| {
            let m = caps.get(0).unwrap();
            blocks
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, block)| (m.start(), m.end(), *block))
        });

        let Some((start, end, block)) = token else {
            out.push(line.to_string());
            continue;
        };

        let prefix = &line[..start];
        let suffix = &line[end..];
        let block = block.strip_suffix('\n').unwrap_or(block);

        if block.is_empty() {
            out.push(format!("{}{}", prefix, suffix));
            continue;
        }

        let indent = " ".repeat(prefix.chars().count());
        let mut block_lines = block.split('\n');

        // First expansion line lands at the placeholder column; the parent's
        // own prefix already provides it.
        let first = block_lines.next().unwrap_or("");
        out.push(format!("{}{}", prefix, first));
        for continuation in block_lines {
            out.push(format!("{}{}", indent, continuation));
        }
        if !suffix.is_empty() {
            if let Some(last) = out.last_mut() {
                last.push_str(suffix);
            }
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_every_occurrence() {
        let template = r"name = \[module\], again \[module\]";
        let result = insert(template, &[("module", "demo".to_string())]);
        assert_eq!(result, "name = demo, again demo");
    }

    #[test]
    fn test_insert_leaves_unsupplied_placeholders() {
        let template = r"\[known\] and \{block_f\} and \[unknown\]";
        let result = insert(template, &[("known", "v".to_string())]);
        assert_eq!(result, r"v and \{block_f\} and \[unknown\]");
    }

    #[test]
    fn test_insert_treats_malformed_syntax_as_literal() {
        let template = r"\[bad name\] [plain] \[open";
        let result = insert(template, &[("bad", "x".to_string()), ("plain", "y".to_string())]);
        assert_eq!(result, template);
    }

    #[test]
    fn test_insert_does_not_reexpand_values() {
        let template = r"desc = \[description\]";
        let result = insert(
            template,
            &[
                ("description", r"uses \[module\] syntax".to_string()),
                ("module", "oops".to_string()),
            ],
        );
        assert_eq!(result, r"desc = uses \[module\] syntax");
    }

    #[test]
    fn test_insert_loop_preserves_order_and_count() {
        let fragment = "item: \\[name\\]\n";
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let result = insert_loop(fragment, "name", &values);
        assert_eq!(result, "item: a\nitem: b\nitem: c\n");
    }

    #[test]
    fn test_insert_loop_empty_list_yields_empty_string() {
        let fragment = "item: \\[name\\]\n";
        assert_eq!(insert_loop(fragment, "name", &[]), "");
    }

    #[test]
    fn test_insert_loop_keeps_fragment_trailing_characters() {
        let fragment = r#""\[dep\]","#;
        let values = vec!["x".to_string(), "y".to_string()];
        assert_eq!(insert_loop(fragment, "dep", &values), r#""x","y","#);
    }

    #[test]
    fn test_indent_merge_aligns_continuation_lines() {
        let parent = "list = [\n    \\{items_f\\}\n]\n";
        let block = "\"a\",\n\"b\",\n\"c\",\n";
        let result = indent_merge(parent, &[("items_f", block)]);
        assert_eq!(result, "list = [\n    \"a\",\n    \"b\",\n    \"c\",\n]\n");
    }

    #[test]
    fn test_indent_merge_empty_block_leaves_no_entry() {
        let parent = "list = [\n    \\{items_f\\}\n]\n";
        let result = indent_merge(parent, &[("items_f", "")]);
        assert_eq!(result, "list = [\n    \n]\n");
    }

    #[test]
    fn test_indent_merge_leaves_unknown_blocks() {
        let parent = "    \\{mystery_f\\}\n";
        let result = indent_merge(parent, &[("items_f", "\"a\",\n")]);
        assert_eq!(result, parent);
    }

    #[test]
    fn test_indent_merge_preserves_suffix_on_last_line() {
        let parent = "pre \\{items_f\\} post";
        let block = "one\ntwo";
        let result = indent_merge(parent, &[("items_f", block)]);
        assert_eq!(result, "pre one\n    two post");
    }

    #[test]
    fn test_indent_merge_merges_multiple_blocks() {
        let parent = "  \\{a_f\\}\n    \\{b_f\\}\n";
        let result = indent_merge(parent, &[("a_f", "1\n2\n"), ("b_f", "3\n4\n")]);
        assert_eq!(result, "  1\n  2\n    3\n    4\n");
    }
}
