error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Regex(::regex::Error);
    }

    errors {
        InvalidMappingLine(line_number: usize, line: String) {
            description("invalid mapping line")
            display("Line {} is not of the form '<source> -> <target>[, <target>...]': {}", line_number, line)
        }
        DuplicateSource(name: String) {
            description("duplicate mapping source")
            display("Source {} is mapped more than once", name)
        }
        InvalidTargetName(target: String) {
            description("invalid target name")
            display("Target {} is not a plain file name", target)
        }
        SameFile(source: String, destination: String) {
            description("source and destination are the same file")
            display("{} and {} are the same file", source, destination)
        }
    }
}
