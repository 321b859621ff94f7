#[cfg(test)]
mod description_tests {
    use crate::utils::{header_entries, load_fixture, render_fixture, string_table_symbols};
    use protoconv_description::builder::build;
    use protoconv_description::node::Annotation;
    use protoconv_description::symbols::allocate_all;
    use rustc_hash::FxHashSet;

    #[test]
    fn every_input_node_is_reachable_once() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let tree = &rendered.tree;
        let visited: Vec<_> = tree.pre_order().collect();
        let unique: FxHashSet<_> = visited.iter().copied().collect();
        assert_eq!(visited.len(), unique.len());
        // root and the synthesized main group come on top of the container
        assert_eq!(visited.len(), source.user_data.len() + 2);
        for entry in &source.user_data {
            assert!(tree.find(&entry.descid).is_some(), "{} missing", entry.descid);
        }
    }

    #[test]
    fn ids_increase_in_pre_order() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let ids: Vec<i64> = rendered.symbols.symbols().iter().map(|(_, id)| *id).collect();
        assert_eq!(ids.first(), Some(&1000));
        assert!(ids.windows(2).all(|pair| pair[1] == pair[0] + 1));

        let names: Vec<&str> = rendered
            .symbols
            .symbols()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "SHOWCASE_SETTINGS_GROUP",
                "SHOWCASE_SETTINGS_OPACITY",
                "SHOWCASE_OFFSET",
                "SHOWCASE_TARGET",
                "SHOWCASE_LABEL",
                "SHOWCASE_ENABLED",
                "SHOWCASE_COUNT",
                "SHOWCASE_MODE",
            ]
        );
    }

    #[test]
    fn allocation_is_deterministic() {
        let source = load_fixture(module_path!(), "showcase");
        let first = render_fixture(&source, "SHOWCASE_");
        let second = render_fixture(&source, "SHOWCASE_");
        assert_eq!(first.symbols.symbols(), second.symbols.symbols());
        assert_eq!(first.resources, second.resources);
    }

    #[test]
    fn rendered_symbols_are_declared_with_their_ids() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let header = header_entries(&rendered.resources.header);
        let declared: FxHashSet<&str> = header.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(declared.len(), header.len(), "duplicate header entries");

        for (symbol, id) in rendered.symbols.symbols() {
            assert!(header.contains(&(symbol.clone(), *id)), "{symbol} = {id} missing");
        }
        for symbol in string_table_symbols(&rendered.resources.strings) {
            assert!(declared.contains(symbol.as_str()), "{symbol} not in header");
        }
        for line in rendered.resources.description.lines() {
            for word in line.split_whitespace() {
                let word = word.trim_end_matches(';');
                if word.starts_with("SHOWCASE_") {
                    assert!(declared.contains(word), "{word} not in header");
                }
            }
        }
    }

    #[test]
    fn cycle_constants_follow_the_choice_list() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let header = header_entries(&rendered.resources.header);
        let choices: Vec<_> = header
            .iter()
            .filter(|(name, _)| name.starts_with("SHOWCASE_MODE_"))
            .cloned()
            .collect();
        assert_eq!(
            choices,
            vec![
                ("SHOWCASE_MODE_LINEAR".to_string(), 0),
                ("SHOWCASE_MODE_SMOOTH_STEP".to_string(), 1),
            ]
        );
        assert!(rendered.resources.description.contains(
            "    LONG SHOWCASE_MODE {\n      CYCLE {\n        SHOWCASE_MODE_LINEAR;\n        SHOWCASE_MODE_SMOOTH_STEP;\n      }\n    }\n"
        ));
        assert!(rendered.resources.strings.contains("    SHOWCASE_MODE_SMOOTH_STEP \"Smooth Step\";\n"));
    }

    #[test]
    fn showcase_grammar() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let description = &rendered.resources.description;

        assert!(description.starts_with("CONTAINER Otest {\n  INCLUDE Obase;\n  NAME Otest;\n  GROUP ID_OBJECTPROPERTIES {\n"));
        assert!(description.contains("    GROUP SHOWCASE_SETTINGS_GROUP {\n      DEFAULT 1;\n      COLUMNS 2;\n"));
        assert!(description.contains("      REAL SHOWCASE_SETTINGS_OPACITY { DEFAULT 50.0; CUSTOMGUI REALSLIDER; MIN 0.0; MAX 100.0; MINSLIDER 0.0; MAXSLIDER 100.0; STEP 25.0; UNIT PERCENT; }\n"));
        assert!(description.contains("    VECTOR SHOWCASE_OFFSET { DEFAULT 0.0 1.0 0.0; }\n"));
        assert!(description.contains("    LINK SHOWCASE_TARGET { ACCEPT { Obase; } }\n"));
        assert!(description.contains("    SEPARATOR { LINE; }\n"));
        assert!(description.contains("    STRING SHOWCASE_LABEL { }\n"));
        assert!(description.contains("    BOOL SHOWCASE_ENABLED { DEFAULT 1; }\n"));
        assert!(description.contains("    LONG SHOWCASE_COUNT { ANIMATE OFF; DEFAULT 3; MAX 10; }\n"));
        assert!(description.ends_with("  }\n}\n"));
    }

    #[test]
    fn quicktab_is_recorded_as_hardcoded() {
        let source = load_fixture(module_path!(), "showcase");
        let rendered = render_fixture(&source, "SHOWCASE_");
        let hardcoded = rendered.symbols.hardcoded_descriptions();
        assert_eq!(hardcoded.len(), 1);
        assert_eq!(
            rendered.symbols.symbol_for(&hardcoded[0].descid),
            Some("SHOWCASE_MODE")
        );
        assert!(!rendered.resources.description.contains("QUICKTAB"));
    }

    #[test]
    fn same_named_children_get_parent_prefixes() {
        let source = load_fixture(module_path!(), "alpha_beta");
        let mut tree = build(source.user_data_pairs()).unwrap();
        let symbols = allocate_all(&mut tree, "MY_");
        assert_eq!(
            symbols.symbols(),
            &[
                ("MY_ALPHA_GROUP".to_string(), 1000),
                ("MY_ALPHA_ENABLE".to_string(), 1001),
                ("MY_BETA_GROUP".to_string(), 1002),
                ("MY_BETA_ENABLE".to_string(), 1003),
            ]
        );
    }

    #[test]
    fn unhandled_type_is_dropped_everywhere() {
        let source = load_fixture(module_path!(), "unsupported");
        let rendered = render_fixture(&source, "MIX_");
        assert_eq!(
            rendered.symbols.symbols(),
            &[("MIX_BEFORE".to_string(), 1000), ("MIX_AFTER".to_string(), 1001)]
        );
        let resources = &rendered.resources;
        for text in [&resources.header, &resources.description, &resources.strings] {
            assert!(!text.to_lowercase().contains("mystery"));
        }
        assert!(resources.description.contains("INCLUDE Tbase;"));
        assert!(resources.description.contains("    REAL MIX_BEFORE { DEFAULT 1.5; }\n"));
        assert!(resources.description.contains("    LONG MIX_AFTER { DEFAULT 7; }\n"));

        let mystery = rendered
            .tree
            .find(&source.user_data[1].descid)
            .and_then(|id| rendered.tree.param(id))
            .map(|param| param.annotation.clone());
        assert_eq!(mystery, Some(Annotation::Unsupported));
    }
}
