// tests/file_pipeline.rs
// Exercises the read -> translate -> write pipeline against real files

use std::fs;

use py2cpp::codegen::generate_cpp;

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    // Helper to set up a source file in its own scratch directory
    fn write_source(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("test.py");
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    #[test]
    fn test_translate_file_to_output() {
        let dir = tempfile::tempdir().expect("Failed to create scratch dir");
        let input = write_source(&dir, "if x > 0:\n    print('positive', x)\n");

        let source = fs::read_to_string(&input).expect("Could not read test file");
        let cpp = generate_cpp(&source);

        let output = dir.path().join("output.cpp");
        fs::write(&output, &cpp).expect("Failed to write output file");

        let written = fs::read_to_string(&output).expect("Could not read output file");
        assert_eq!(written, cpp, "Output file should hold the generated program verbatim");
        assert!(written.starts_with("#include <iostream>\n"));
        assert!(written.ends_with("}\n"));
    }

    #[test]
    fn test_mixed_script_simulation() {
        let content = concat!(
            "name = 'world'\n",
            "\n",
            "if ready and not blocked:\n",
            "    print('starting', name)\n",
            "    if count > 1 or retry:\n",
            "        print('again')\n",
            "\n",
            "print('done')\n",
        );
        let dir = tempfile::tempdir().expect("Failed to create scratch dir");
        let input = write_source(&dir, content);

        let source = fs::read_to_string(&input).expect("Could not read test file");
        let cpp = generate_cpp(&source);

        let expected = concat!(
            "#include <iostream>\n",
            "#include <string>\n",
            "\n",
            "int main() {\n",
            "    if (ready && ! blocked) {\n",
            "        std::cout << \"starting\" << \" \" << name << std::endl;\n",
            "        if (count > 1 || retry) {\n",
            "            std::cout << \"again\" << std::endl;\n",
            "        }\n",
            "    }\n",
            "    std::cout << \"done\" << std::endl;\n",
            "    return 0;\n",
            "}\n",
        );
        assert_eq!(cpp, expected, "Assignments drop out, everything else translates in order");
    }

    #[test]
    fn test_unreadable_input_is_a_read_error() {
        let dir = tempfile::tempdir().expect("Failed to create scratch dir");
        let missing = dir.path().join("no_such.py");
        assert!(
            fs::read_to_string(&missing).is_err(),
            "A missing input file must surface as a read error, not empty source"
        );
    }
}
