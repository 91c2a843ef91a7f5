//! Tests for the bytecode compiler.

use crate::{
    compiler::{BytecodeCompiler, CompileErrorKind, compile},
    syntax::Span,
    vm::{Instruction, Program},
};
use pretty_assertions::assert_eq;

/// Check that every loop pair in `program` satisfies the jump invariants.
fn assert_jumps_resolved(program: &Program) {
    for (index, instr) in program.iter().enumerate() {
        match *instr {
            Instruction::JumpIfZero(target) => {
                assert!(target >= 2 && target <= program.len(), "target {target}");
                assert_eq!(
                    program[target - 1],
                    Instruction::Jump(index),
                    "JumpIfZero at {index} must land just after its Jump"
                );
            }
            Instruction::Jump(target) => {
                assert!(target < index);
                let Instruction::JumpIfZero(forward) = program[target] else {
                    panic!("Jump at {index} must land on a JumpIfZero");
                };
                assert_eq!(forward, index + 1);
            }
            _ => {}
        }
    }
}

#[test]
fn test_compile_simple_commands() {
    let program = compile("><+-.,").unwrap();

    use Instruction::*;
    assert_eq!(
        program.instructions(),
        &[MoveRight, MoveLeft, Increment, Decrement, Output, Input]
    );
}

#[test]
fn test_compile_clear_loop() {
    let program = compile("[-]").unwrap();

    // Verify bytecode: JumpIfZero(3), Decrement, Jump(0)
    assert_eq!(program.len(), 3);
    assert_eq!(program[0], Instruction::JumpIfZero(3));
    assert_eq!(program[1], Instruction::Decrement);
    assert_eq!(program[2], Instruction::Jump(0));
}

#[test]
fn test_compile_nested_loops() {
    let program = compile("+[>[-]<-]").unwrap();

    use Instruction::*;
    assert_eq!(
        program.instructions(),
        &[
            Increment,
            JumpIfZero(9),
            MoveRight,
            JumpIfZero(6),
            Decrement,
            Jump(3),
            MoveLeft,
            Decrement,
            Jump(1),
        ]
    );
    assert_jumps_resolved(&program);
}

#[test]
fn test_compile_sibling_loops() {
    let program = compile("[][]").unwrap();

    use Instruction::*;
    assert_eq!(
        program.instructions(),
        &[JumpIfZero(2), Jump(0), JumpIfZero(4), Jump(2)]
    );
}

#[test]
fn test_compile_empty_source() {
    assert!(compile("").unwrap().is_empty());
    assert!(compile("only commentary here!\n\t").unwrap().is_empty());
}

#[test]
fn test_commentary_does_not_change_program() {
    let plain = compile("++[>+<-]>.").unwrap();
    let commented = compile("add two: ++ [ > + < - ] then print > .\n").unwrap();
    assert_eq!(plain, commented);

    let unicode = compile("→ ++ ✓ [>+<-] ☃ >.").unwrap();
    assert_eq!(plain, unicode);
}

#[test]
fn test_well_bracketed_sources_resolve_jumps() {
    let sources = [
        "[]",
        "[[]]",
        "[[[[[]]]]]",
        "+[-[+[-]]>[<]]",
        "[][[]][[][]]",
        ">++++++++[<+++++++++>-]<.>++++[<+++++++>-]<+.",
    ];
    for source in sources {
        let program = compile(source).unwrap();
        assert_jumps_resolved(&program);
    }
}

#[test]
fn test_unmatched_close() {
    let err = compile("]").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::UnmatchedClose);
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_unmatched_close_after_balanced_prefix() {
    let err = compile("+[-]]+[").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::UnmatchedClose);
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn test_unmatched_close_wins_over_later_open() {
    // The scan stops at the first stray `]`.
    let err = compile("][").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::UnmatchedClose);
}

#[test]
fn test_unmatched_open() {
    let err = compile("[").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::UnmatchedOpen);
    assert_eq!(err.span, Span::new(0, 1));
    assert!(err.unclosed.is_empty());
}

#[test]
fn test_unmatched_open_reports_innermost_first() {
    let err = compile("[+[-[]").unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::UnmatchedOpen);
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(err.unclosed, vec![Span::new(0, 1)]);
}

#[test]
fn test_error_spans_are_byte_offsets() {
    let err = compile("é]").unwrap_err();
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(err.span.str_of("é]"), "]");
}

#[test]
fn test_feed_across_chunks() {
    let mut compiler = BytecodeCompiler::new();
    compiler.feed("+[>", 0).unwrap();
    compiler.feed("+<-]", 3).unwrap();
    let program = compiler.finalize().unwrap();
    assert_eq!(program, compile("+[>+<-]").unwrap());
}

#[test]
fn test_feed_uses_chunk_offset_for_spans() {
    let mut compiler = BytecodeCompiler::new();
    compiler.feed("line one\n", 0).unwrap();
    let err = compiler.feed("  ]", 9).unwrap_err();
    assert_eq!(err.span, Span::new(11, 12));
}

#[test]
fn test_display_messages() {
    assert_eq!(
        compile("]").unwrap_err().to_string(),
        "`]` found without corresponding `[` at 0..1"
    );
    assert_eq!(
        compile("..[").unwrap_err().to_string(),
        "`[` found without corresponding `]` at 2..3"
    );
}

#[test]
fn test_to_diagnostic() {
    let diag = compile("[[").unwrap_err().to_diagnostic();
    assert_eq!(diag.code.as_deref(), Some("C002"));
    assert_eq!(diag.span, Span::new(1, 2));
    assert_eq!(diag.related.len(), 1);
    assert_eq!(diag.related[0].span, Span::new(0, 1));
    assert_eq!(diag.help.len(), 1);

    let diag = compile("]").unwrap_err().to_diagnostic();
    assert_eq!(diag.code.as_deref(), Some("C001"));
    assert!(diag.related.is_empty());
}
