use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

#[derive(Default)]
struct Requested {
    get: bool,
    copy: bool,
    get_mut: bool,
    set: bool,
    upd: bool,
}

fn parse_requested(field: &Field) -> syn::Result<Requested> {
    let mut requested = Requested::default();

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("helper")) {
        attr.parse_nested_meta(|meta| {
            let flag = if meta.path.is_ident("get") {
                &mut requested.get
            } else if meta.path.is_ident("copy") {
                &mut requested.copy
            } else if meta.path.is_ident("get_mut") {
                &mut requested.get_mut
            } else if meta.path.is_ident("set") {
                &mut requested.set
            } else if meta.path.is_ident("upd") {
                &mut requested.upd
            } else if meta.path.is_ident("all") {
                requested.get = true;
                requested.get_mut = true;
                requested.set = true;
                requested.upd = true;
                return Ok(());
            } else {
                return Err(meta.error(format!(
                    "Unexpected expression in macro: {}. Expected one of: get, copy, get_mut, set, upd or all",
                    meta.path
                        .segments
                        .iter()
                        .map(|segment| segment.ident.to_string())
                        .collect::<Vec<_>>()
                        .join("::")
                )));
            };

            *flag = true;
            Ok(())
        })?;
    }

    if requested.get && requested.copy {
        return Err(syn::Error::new_spanned(
            field,
            "`get` and `copy` generate the same method, pick one",
        ));
    }

    Ok(requested)
}

#[proc_macro_derive(ImplHelper, attributes(helper))]
pub fn impl_helper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(data_struct) => match data_struct.fields {
            Fields::Named(fields) => fields.named,
            _ => return TokenStream::new(),
        },
        _ => {
            return syn::Error::new_spanned(&name, "ImplHelper supports structs only")
                .to_compile_error()
                .into()
        }
    };

    let mut methods = Vec::default();

    for field in fields.iter() {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;

        let requested = match parse_requested(field) {
            Ok(requested) => requested,
            Err(e) => return e.to_compile_error().into(),
        };

        if requested.get {
            methods.push(quote! {
                pub fn #field_name(&self) -> &#field_type {
                    &self.#field_name
                }
            });
        }

        if requested.copy {
            methods.push(quote! {
                pub fn #field_name(&self) -> #field_type {
                    self.#field_name
                }
            });
        }

        if requested.get_mut {
            let fn_name = syn::Ident::new(&format!("{}_mut", field_name), field_name.span());

            methods.push(quote! {
                pub fn #fn_name(&mut self) -> &mut #field_type {
                    &mut self.#field_name
                }
            });
        }

        if requested.set {
            let fn_name = syn::Ident::new(&format!("{}_set", field_name), field_name.span());

            methods.push(quote! {
                #[must_use = "method moves the value of self and returns the modified value"]
                pub fn #fn_name(mut self, value: #field_type) -> Self {
                    self.#field_name = value;
                    self
                }
            });
        }

        if requested.upd {
            let fn_name = syn::Ident::new(&format!("{}_update", field_name), field_name.span());

            methods.push(quote! {
                pub fn #fn_name(&mut self, value: #field_type) -> &mut Self {
                    self.#field_name = value;
                    self
                }
            });
        }
    }

    TokenStream::from(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    })
}
