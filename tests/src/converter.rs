#[cfg(test)]
mod converter_tests {
    use crate::utils::{header_entries, load_fixture};
    use protoconv::plan::FileRole;
    use protoconv::settings::{ConverterSettings, ExportScope, IndentStyle, SymbolMode};
    use protoconv::{ConvertError, Converter};

    fn strength_converter(dir: &std::path::Path) -> Converter {
        let source = load_fixture(module_path!(), "strength");
        let mut converter = Converter::new(
            ConverterSettings {
                plugin_id: "1040000".into(),
                symbol_prefix: "PREFIX_".into(),
                directory: Some(dir.join("strength")),
                indent: IndentStyle::Tab,
                ..ConverterSettings::default()
            },
            Some(source),
        );
        converter.autofill();
        converter
    }

    fn read(converter: &Converter, role: FileRole) -> String {
        let plan = converter.files();
        let path = plan.get(role).unwrap();
        std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
    }

    #[test]
    fn strength_scenario() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let converter = strength_converter(dir.path());
        assert_eq!(converter.settings.resource_name, "Ostrengthdemo");
        converter.create()?;

        assert_eq!(
            read(&converter, FileRole::Header),
            "#pragma once\nenum {\n\tOstrengthdemo = 1040000,\n\tPREFIX_STRENGTH = 1000,\n\t\tPREFIX_STRENGTH_LOW = 0,\n\t\tPREFIX_STRENGTH_HIGH = 1,\n};\n"
        );
        assert_eq!(
            read(&converter, FileRole::Description),
            "CONTAINER Ostrengthdemo {\n\tINCLUDE Obase;\n\tNAME Ostrengthdemo;\n\tGROUP ID_OBJECTPROPERTIES {\n\t\tLONG PREFIX_STRENGTH {\n\t\t\tDEFAULT PREFIX_STRENGTH_HIGH;\n\t\t\tCYCLE {\n\t\t\t\tPREFIX_STRENGTH_LOW;\n\t\t\t\tPREFIX_STRENGTH_HIGH;\n\t\t\t}\n\t\t}\n\t}\n}\n"
        );
        assert_eq!(
            read(&converter, FileRole::StringsUs),
            "STRINGTABLE Ostrengthdemo {\n\tOstrengthdemo \"Strength Demo\";\n\tPREFIX_STRENGTH \"Strength\";\n\t\tPREFIX_STRENGTH_LOW \"Low\";\n\t\tPREFIX_STRENGTH_HIGH \"High&i300\";\n}\n"
        );
        Ok(())
    }

    #[test]
    fn header_matches_symbol_map_on_disk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let converter = strength_converter(dir.path());
        let report = converter.create()?;
        let header = header_entries(&read(&converter, FileRole::Header));
        assert_eq!(header.len(), 4);
        assert_eq!(report.symbols, 1);
        Ok(())
    }

    #[test]
    fn existing_resource_blocks_run_without_overwrite() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let converter = strength_converter(dir.path());
        let plan = converter.files();
        let res = plan.get(FileRole::Description).unwrap();
        std::fs::create_dir_all(res.parent().unwrap())?;
        std::fs::write(res, "keep me")?;

        let err = converter.create().unwrap_err();
        assert!(matches!(err, ConvertError::FileExists { .. }));
        assert!(err.to_string().contains("already exists"));
        assert!(!plan.get(FileRole::Header).unwrap().exists());
        assert_eq!(std::fs::read_to_string(res)?, "keep me");
        Ok(())
    }

    #[test]
    fn stub_in_c4d_mode_lists_symbols() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut converter = strength_converter(dir.path());
        converter.settings.symbol_mode = SymbolMode::C4d;
        converter.create()?;
        let stub = read(&converter, FileRole::Plugin);
        assert!(stub.contains("class res(object):\n\tPREFIX_STRENGTH = 1000\n"));
        assert!(stub.contains("\t\tnode[res.PREFIX_STRENGTH] = 1\n"));
        assert!(stub.contains("c4d.plugins.RegisterObjectPlugin("));
        assert!(stub.contains("c4d.OBJECT_GENERATOR"));
        Ok(())
    }

    #[test]
    fn stub_in_c4ddev_mode_reads_the_header() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let converter = strength_converter(dir.path());
        converter.create()?;
        let stub = read(&converter, FileRole::Plugin);
        assert!(stub.contains("def load_symbols(filename):"));
        assert!(stub.contains("u\"Ostrengthdemo.h\""));
        assert!(!stub.contains("class res(object):"));
        Ok(())
    }

    #[test]
    fn resources_only_export_skips_the_stub() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut converter = strength_converter(dir.path());
        converter.settings.export = ExportScope::Resources;
        let report = converter.create()?;
        assert_eq!(report.written.len(), 4);
        assert!(
            !report
                .written
                .iter()
                .any(|path| path.extension().is_some_and(|ext| ext == "pyp"))
        );
        Ok(())
    }

    #[test]
    fn c4d_symbols_survive_a_regular_run() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let converter = strength_converter(dir.path());
        let plan = converter.files();
        let symbols = plan.get(FileRole::C4dSymbols).unwrap();
        std::fs::create_dir_all(symbols.parent().unwrap())?;
        std::fs::write(symbols, "enum { MY_DIALOG = 1 };\n")?;

        let report = converter.create()?;
        assert!(report.skipped.iter().any(|path| path == symbols));
        assert_eq!(std::fs::read_to_string(symbols)?, "enum { MY_DIALOG = 1 };\n");
        Ok(())
    }
}
