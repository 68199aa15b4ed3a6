use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse_macro_input, punctuated::Punctuated, token::Comma, Expr,
    Member::{Named, Unnamed},
};

/// Use this instead of `anyhow::anyhow!()`
#[proc_macro]
pub fn wohyna(input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(input);

    let output = quote! {
        {
            let loc = std::panic::Location::caller();

            anyhow::anyhow!(
                "[{}:{}:{}] {}",
                loc.file(),
                loc.line(),
                loc.column(),
                format!(#args)
            )
        }
    };

    output.into()
}

/// Wraps a `Result` or an `Option` with the call site and the expression,
/// including the `Debug` form of every argument (clipped by
/// `crate::utils::clip_debug`)
#[proc_macro]
pub fn arg_context(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    let description = describe_expr(&expr, true);

    with_location_context(&expr, description).into()
}

/// Same as `arg_context!`, but arguments are printed as `?`
#[proc_macro]
pub fn raw_context(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    let description = describe_expr(&expr, false);

    with_location_context(&expr, description).into()
}

fn with_location_context(
    expr: &Expr,
    description: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    quote! {
        {
            use anyhow::Context;

            let loc = std::panic::Location::caller();

            #expr.with_context(|| {
                format!(
                    "[{}:{}:{}] {}",
                    loc.file(),
                    loc.line(),
                    loc.column(),
                    #description
                )
            })
        }
    }
}

fn describe_args(args: &Punctuated<Expr, Comma>, print_args: bool) -> proc_macro2::TokenStream {
    if !print_args {
        return quote!(String::from("?"));
    }

    let arg_to_string_iter = args
        .iter()
        .map(|arg| quote!(crate::utils::clip_debug(&#arg)));

    quote! {
        <Vec<String>>::from([#(#arg_to_string_iter),*]).join(", ")
    }
}

fn tokens_to_string<T: ToTokens>(tokens: &T) -> String {
    tokens
        .to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" . ", ".")
}

fn describe_expr(expr: &Expr, print_args: bool) -> proc_macro2::TokenStream {
    match expr {
        Expr::Call(call) => {
            let func_name = describe_expr(&call.func, print_args);
            let args_list = describe_args(&call.args, print_args);

            quote! {
                format!("{}({})", #func_name, #args_list)
            }
        }
        Expr::MethodCall(method) => {
            let receiver_name = describe_expr(&method.receiver, print_args);
            let method_name = method.method.to_string();
            let args_list = describe_args(&method.args, print_args);

            quote! {
                format!("{}.{}({})", #receiver_name, #method_name, #args_list)
            }
        }
        Expr::Field(field) => {
            let base_name = describe_expr(&field.base, print_args);
            let member_name = match &field.member {
                Named(ident) => ident.to_string(),
                Unnamed(index) => index.index.to_string(),
            };

            quote!(format!("{}.{}", #base_name, #member_name))
        }
        Expr::Await(aw) => {
            let base_name = describe_expr(&aw.base, print_args);

            quote!(format!("{}.await", #base_name))
        }
        Expr::Try(tr) => describe_expr(&tr.expr, print_args),
        Expr::Paren(paren) => {
            let inner = describe_expr(&paren.expr, print_args);

            quote!(format!("({})", #inner))
        }
        Expr::Reference(reference) => {
            let inner = describe_expr(&reference.expr, print_args);

            quote!(format!("&{}", #inner))
        }
        Expr::Macro(ma) => {
            let path = tokens_to_string(&ma.mac.path);
            let tokens = ma.mac.tokens.to_string();

            quote!(format!("{}!({})", #path, #tokens))
        }
        // Paths, literals, indexing and the rest are printed as written
        _ => {
            let text = tokens_to_string(expr);

            quote!(String::from(#text))
        }
    }
}
