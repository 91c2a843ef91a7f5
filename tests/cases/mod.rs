use once_cell::sync::Lazy;

/// A complete program with the input it is fed and the output it must write.
pub struct ProgramCase {
    pub name: &'static str,
    pub source: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

pub static PROGRAM_CASES: Lazy<Vec<ProgramCase>> = Lazy::new(|| {
    vec![
        ProgramCase {
            name: "hello_world",
            source: include_str!("hello.oct"),
            input: b"",
            output: b"Hello World!\n",
        },
        ProgramCase {
            name: "cat_until_end_of_input",
            source: ",[.,]",
            input: b"echo me",
            output: b"echo me",
        },
        ProgramCase {
            name: "reverse_line",
            source: ">,----------[++++++++++>,----------]<[.<]",
            input: b"stressed\n",
            output: b"desserts",
        },
        ProgramCase {
            name: "uppercase",
            source: ",[>++++[<-------->-]<.,]",
            input: b"octet",
            output: b"OCTET",
        },
        ProgramCase {
            name: "add_two_digits",
            source: ",>,[<+>-]<------------------------------------------------.",
            input: b"34",
            output: b"7",
        },
        ProgramCase {
            name: "commented_program",
            source: "print an exclamation mark: +++++[>+++++++<-]>--. done",
            input: b"",
            output: b"!",
        },
    ]
});

/// Declares a test that compiles `source`, runs it on `input` and compares the output.
macro_rules! program_case {
    (
        name: $name:ident,
        source: $source:expr,
        input: $input:expr,
        output: $output:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let compiled = octet::CompiledProgram::compile($source).unwrap();
            let mut input = $input.iter().copied();
            let mut output = Vec::new();
            compiled.run(&mut || input.next().unwrap_or(0), &mut |b: u8| output.push(b));
            pretty_assertions::assert_eq!(output.as_slice(), &$output[..]);
        }
    };
}
