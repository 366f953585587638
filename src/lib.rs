pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::CommonsConfig;

pub use self::core::collection::{
    as_list, as_non_empty_list, concat, contains_any, contains_one_of, head_of, reverse, tail_of,
};
pub use self::core::container::{is_empty, non_empty};
pub use self::core::contract::{
    precondition, require, require_non_blank, require_non_empty, require_non_null, require_some,
};
pub use self::core::exceptions::{illegal_argument_exception, illegal_state_exception, runtime_exception};
pub use self::core::functional::{cast_boxed_to, cast_to, instance_of, map_safely};
pub use self::core::sequence::{
    concat_all, concat_and_sequence, sequence, ReversedList, Sequence, SequenceExt,
};
pub use self::core::strings::{
    capitalize, generate, generate_delimited, is_blank, non_blank, quote, quote_all,
    quote_if_string, strip_head, strip_tail, uncapitalize,
};
pub use domain::ports::{Container, Requirement};
pub use utils::error::{CommonsError, ErrorCategory, Result};
