//! Help texts shown by `help` and `dhelp`.

/// Shown by `help`.
pub const GENERAL: &str = "\
# Delta

Delta reads mathematical expressions and prints the tokens it finds in them.

    >> x = 2.5e3;
    LC_IDENTIFIER x [variable] @ ln 1 : col 1
    LC_OP_ASSIGNMENT_ASSIGN @ ln 1 : col 3
    LC_LITERAL_FP 2.5e3 = 2500 @ ln 1 : col 5
    LC_SEPARATOR_SEMICOL @ ln 1 : col 10

Commands: help, quit, ws, wsc, dhelp(\"topic\"), load(\"file\"), from(\"library\"),
import(\"function\"). Parentheses are optional: `load \"file\"` works too.

Topics for dhelp: intro, data-types, operations, functions, variables,
workspace, libraries, notebooks, help, quit
";

/// Topic names with their texts, in display order.
pub const TOPICS: &[(&str, &str)] = &[
    (
        "intro",
        "\
# Delta

Delta recognizes mathematical expressions typed at the prompt or stored in
files. Type `help` for an overview and `dhelp(\"topic\")` for details.
",
    ),
    (
        "data-types",
        "\
## Data types

- Integers: one or more digits, `_` allowed as a separator (`1_000`).
  Binary integers start with `0b` (`0b1010`).
- Floats: a dot, an exponent or both (`1.15`, `.3`, `10E5`, `2.43E-4`).
- Strings: double quoted, `\\` escapes the next character. `\"\"` is an error.

A letter glued to a number is reported instead of being read as a name:

    >> 45a
    error[E2323]: malformed base 10 integer number, ...
",
    ),
    (
        "operations",
        "\
## Operations

Recognized operators: `- * / < > = == ++ +=`, the separators `, ;`, and the
brackets `( ) [ ] { }`. A lone `+` is reported: only `++` and `+=` start
with it for now.
",
    ),
    (
        "functions",
        "\
## Mathematical functions

Built-in functions such as `sqrt`, `sin`, `cos`, `exp` and `log` are seeded
in the symbol table and print as `LC_IDENTIFIER_FUNCTION`. `ws` lists them.
",
    ),
    (
        "variables",
        "\
## Variables and constants

Any other name is a variable and is added to the workspace the first time it
is seen. The constants `e` and `pi` are predefined and cannot be reassigned.
",
    ),
    (
        "workspace",
        "\
## The workspace

`ws` lists the constants, the functions and then the variables seen so far.
`wsc` forgets every variable; constants and functions stay.
",
    ),
    (
        "libraries",
        "\
## Loading functions from libraries

`from(\"libm.so\")` selects a dynamic library and `import(\"name\")` would add
one of its functions. This build cannot open dynamic libraries.
",
    ),
    (
        "notebooks",
        "\
## Notebooks

`load(\"file.dl\")` reads a file as if its contents were typed at the current
point, then continues with the rest of the input. Files may load other files.
",
    ),
    (
        "help",
        "\
## Requesting help

`help` prints the overview; `dhelp(\"topic\")` prints one topic.
",
    ),
    (
        "quit",
        "\
## Exiting Delta

`quit` ends the session. End of input (Ctrl-D) does too.
",
    ),
];

/// Text for `topic`, matched without regard to case.
pub fn topic(name: &str) -> Option<&'static str> {
    TOPICS
        .iter()
        .find(|(topic, _)| topic.eq_ignore_ascii_case(name))
        .map(|&(_, text)| text)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
