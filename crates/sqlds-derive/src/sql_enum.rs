//! `#[derive(SqlEnum)]`: render a unit-only enum as a SQL string value.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(e) => &e.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "SqlEnum can only be derived for enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SqlEnum does not support generic enums",
        ));
    }

    let rename_all = match parse_str_attr(&input.attrs, "rename_all")? {
        Some(style) => Some(RenameStyle::parse(&style).ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!(
                    "unknown rename_all style {style:?}; expected one of \
                     snake_case, SCREAMING_SNAKE_CASE, kebab-case, camelCase, \
                     PascalCase, lowercase, UPPERCASE"
                ),
            )
        })?),
        None => None,
    };

    let mut text_arms = Vec::new();
    let mut copy_arms = Vec::new();

    for variant in variants {
        if !matches!(&variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "SqlEnum variants must be unit variants (no fields)",
            ));
        }

        let variant_ident = &variant.ident;
        let sql_name = match parse_str_attr(&variant.attrs, "rename")? {
            Some(rename) => rename,
            None => rename_all
                .unwrap_or(RenameStyle::Snake)
                .apply(&variant_ident.to_string()),
        };

        text_arms.push(quote! {
            #name::#variant_ident => #sql_name,
        });
        copy_arms.push(quote! {
            #name::#variant_ident => #name::#variant_ident,
        });
    }

    let type_name = name.to_string();

    // An empty enum has no values; the match on `*self` is still exhaustive.
    let expanded = quote! {
        impl #name {
            /// SQL text of this variant.
            pub fn as_sql_str(&self) -> &'static str {
                match *self {
                    #(#text_arms)*
                }
            }
        }

        impl ::sqlds::Valuer for #name {
            fn value(&self) -> ::std::result::Result<::sqlds::SqlText, ::sqlds::BoxError> {
                ::std::result::Result::Ok(::sqlds::SqlText::Text(
                    ::std::string::ToString::to_string(self.as_sql_str()),
                ))
            }

            fn type_name(&self) -> &'static str {
                #type_name
            }
        }

        impl ::std::convert::From<#name> for ::sqlds::Literal {
            fn from(v: #name) -> Self {
                ::sqlds::Literal::custom(v)
            }
        }

        impl ::std::convert::From<&#name> for ::sqlds::Literal {
            fn from(v: &#name) -> Self {
                ::sqlds::Literal::custom(match *v {
                    #(#copy_arms)*
                })
            }
        }
    };

    Ok(expanded)
}

#[derive(Clone, Copy)]
enum RenameStyle {
    Snake,
    ScreamingSnake,
    Kebab,
    Camel,
    Pascal,
    Lower,
    Upper,
}

impl RenameStyle {
    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "camelCase" => Self::Camel,
            "PascalCase" => Self::Pascal,
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            _ => return None,
        })
    }

    fn apply(self, ident: &str) -> String {
        match self {
            Self::Snake => ident.to_snake_case(),
            Self::ScreamingSnake => ident.to_shouty_snake_case(),
            Self::Kebab => ident.to_kebab_case(),
            Self::Camel => ident.to_lower_camel_case(),
            Self::Pascal => ident.to_upper_camel_case(),
            Self::Lower => ident.to_lowercase(),
            Self::Upper => ident.to_uppercase(),
        }
    }
}

/// Find `#[sqlds(<key> = "...")]` among `attrs`.
fn parse_str_attr(attrs: &[Attribute], key: &str) -> Result<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident("sqlds") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in &nested {
            if let Meta::NameValue(nv) = meta
                && nv.path.is_ident(key)
            {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &nv.value
                {
                    return Ok(Some(s.value()));
                }
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    format!("expected a string literal for `{key}`"),
                ));
            }
        }
    }
    Ok(None)
}
