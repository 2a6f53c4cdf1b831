mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error is provided through the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use polish_attrs::ErrorKind;
/// use polish_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     category = IncorrectParsing,
///     message = "unexpected end of input",
///     labels = ["add something here"],
/// )]
/// pub struct Foo;
///
/// assert_eq!(Foo.category(), polish_error::Category::IncorrectParsing);
/// assert_eq!(Foo.message(), "unexpected end of input");
/// ```
///
/// The following tags are available:
///
/// | Tag        | Description                                                                    |
/// | ---------- | ------------------------------------------------------------------------------ |
/// | `category` | Required. One of `IncorrectArgument`, `IncorrectParsing` or `DivisionByZero`.  |
/// | `message`  | Required. The message displayed at the top of the error when it is displayed.  |
/// | `labels`   | The texts of the labels that point to each span of the error, in order.        |
/// | `help`     | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each of `message` and `help` accepts an expression that should evaluate to a [`String`] or
/// `&str`, and `labels` accepts an expression that can be iterated into displayable items. For
/// structs with named fields, the expressions are evaluated with references to the members of
/// the struct in scope, so they can be used in the expression (tuple structs are not supported).
///
/// The generated code refers to the `ariadne` and `polish_error` crates, so both must be
/// dependencies of the crate deriving the trait.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl polish_error::ErrorKind for #name {
            #target
        }
    }.into()
}
