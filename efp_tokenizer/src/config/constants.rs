pub mod compile_time {
    pub mod lexical {
        /// Opens and closes a text literal; doubled inside a literal to embed a quote
        pub const QUOTE_DOUBLE: char = '"';

        /// Opens and closes a quoted workbook/sheet path
        pub const QUOTE_SINGLE: char = '\'';

        /// Bracketed range offset or linked workbook name
        pub const BRACKET_OPEN: char = '[';
        pub const BRACKET_CLOSE: char = ']';

        /// Array literal delimiters
        pub const BRACE_OPEN: char = '{';
        pub const BRACE_CLOSE: char = '}';

        pub const PAREN_OPEN: char = '(';
        pub const PAREN_CLOSE: char = ')';

        /// Array row separator
        pub const SEMICOLON: char = ';';

        pub const WHITESPACE: char = ' ';

        /// Argument separator inside a function, union operator outside one
        pub const COMMA: char = ',';

        /// First character of every error literal
        pub const ERROR_START: char = '#';

        /// Leading marker of an explicit function call (`@SUM(...)`)
        pub const FUNCTION_CALL_MARKER: char = '@';

        /// The assignment prefix every formula is normalized to start with
        pub const FORMULA_PREFIX: char = '=';

        /// Signs that may continue a number written in scientific notation
        pub const OPERATORS_SN: &str = "+-";

        /// Single-character infix operators
        pub const OPERATORS_INFIX: &str = "+-*/^&=><";

        pub const OPERATOR_POSTFIX: char = '%';

        /// Two-character comparison operators, matched before single characters
        pub const COMPARISON_OPERATORS: [&str; 3] = [">=", "<=", "<>"];

        /// Every error literal the scanner recognizes
        pub const ERROR_LITERALS: [&str; 7] = [
            "#NULL!", "#DIV/0!", "#VALUE!", "#REF!", "#NAME?", "#NUM!", "#N/A",
        ];

        /// Accumulated operand text that may be followed by an exponent sign
        pub const SCIENTIFIC_NOTATION_PATTERN: &str = r"^[1-9]{1}(\.[0-9]+)?E{1}$";

        /// Synthetic function names opened for `{` and each array row
        pub const ARRAY_MARKER: &str = "ARRAY";
        pub const ARRAY_ROW_MARKER: &str = "ARRAYROW";

        pub const LOGICAL_TRUE: &str = "TRUE";
        pub const LOGICAL_FALSE: &str = "FALSE";
    }

    pub mod logging {
        /// Maximum events retained by the in-memory logger
        /// RESOURCE: Controls memory usage for event collection
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Longest message accepted before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4_096;

        /// Formula text attached to log context is cut to this many characters
        pub const MAX_CONTEXT_FORMULA_LENGTH: usize = 256;
    }
}
