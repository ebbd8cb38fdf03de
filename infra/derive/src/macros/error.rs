use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{DeriveInput, Fields, Ident, Type, Variant};

const CONTEXT_TYPES: [&str; 2] = ["Option<Cow<'static,str>>", "Option<std::borrow::Cow<'static,str>>"];

/// A variant of an `#[autho_error]` enum. Every variant has a `context` slot;
/// `source` is the wrapped upstream error, if any.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Type>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(variant, "autho_error variants need named fields"));
        };

        let mut context = None;
        let mut source = None;
        for field in &fields.named {
            let Some(name) = &field.ident else { continue };
            if name == "context" {
                context = Some(&field.ty);
            } else if name == "source" {
                source = Some(&field.ty);
            }
        }

        match context {
            Some(ty) if is_context_type(ty) => Ok(Self { ident: &variant.ident, source }),
            Some(ty) => Err(syn::Error::new_spanned(ty, "`context` must be Option<Cow<'static, str>>")),
            None => Err(syn::Error::new_spanned(
                &variant.ident,
                "autho_error variants need a `context: Option<Cow<'static, str>>` field",
            )),
        }
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "autho_error only applies to enums"));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(&input.ident, "autho_error needs at least one variant"));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut errors: Option<syn::Error> = None;
    let mut seen_sources = FxHashSet::default();
    for variant in &data.variants {
        let parsed = ErrorVariant::parse(variant).and_then(|v| {
            let duplicate = v.source.is_some_and(|ty| !seen_sources.insert(type_key(ty)));
            if duplicate {
                Err(syn::Error::new_spanned(
                    variant,
                    "another variant already wraps this source type",
                ))
            } else {
                Ok(v)
            }
        });
        match parsed {
            Ok(v) => variants.push(v),
            Err(err) => match &mut errors {
                Some(all) => all.combine(err),
                None => errors = Some(err),
            },
        }
    }
    if let Some(err) = errors {
        return Err(err);
    }

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let conversions = variants.iter().filter_map(|v| {
        let (ident, source) = (v.ident, v.source?);
        Some(quote! {
            #[automatically_derived]
            impl ::core::convert::From<#source> for #name {
                #[inline]
                fn from(source: #source) -> Self {
                    Self::#ident { source, context: None }
                }
            }

            #[automatically_derived]
            impl<T> #ext<T> for ::core::result::Result<T, #source> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, #name> {
                    self.map_err(|source| #name::#ident { source, context: Some(context.into()) })
                }
            }
        })
    });

    Ok(quote! {
        #[derive(Debug, ::thiserror::Error)]
        #input

        /// Attaches a context message to a failed result.
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl #name {
            /// Returns the context attached to this error, if any.
            #[must_use]
            pub fn context_hint(&self) -> Option<&str> {
                match self {
                    #( Self::#idents { context, .. } )|* => context.as_deref(),
                }
            }

            /// Replaces the context of this error.
            #[must_use]
            pub fn with_context(mut self, text: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                match &mut self {
                    #( Self::#idents { context, .. } )|* => *context = Some(text.into()),
                }
                self
            }
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|err| err.with_context(context))
            }
        }

        #( #conversions )*

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| ::std::borrow::Cow::Owned(format!(" ({c})")))
        }
    })
}

fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

fn is_context_type(ty: &Type) -> bool {
    let key = type_key(ty);
    let key = key.strip_prefix("::").unwrap_or(&key);
    let key = key.strip_prefix("std::option::").or_else(|| key.strip_prefix("core::option::")).unwrap_or(key);
    CONTEXT_TYPES.contains(&key)
}
