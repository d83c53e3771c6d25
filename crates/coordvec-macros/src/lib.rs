extern crate proc_macro;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{braced, bracketed, parse_macro_input, Attribute, Ident, LitInt, Token, Visibility};

const POLICIES: [&str; 3] = ["NoChange", "ZeroToTwoPi", "MinusPlusHalfPi"];

/// One component: `name | alias | ...: Policy`
struct ComponentDecl {
    attrs: Vec<Attribute>,
    names: Vec<Ident>,
    policy: Ident,
}

impl Parse for ComponentDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let names = Punctuated::<Ident, Token![|]>::parse_separated_nonempty(input)?;
        input.parse::<Token![:]>()?;
        let policy: Ident = input.parse()?;
        if !POLICIES.contains(&policy.to_string().as_str()) {
            return Err(syn::Error::new(
                policy.span(),
                format!(
                    "unknown value policy `{}`, expected one of {}",
                    policy,
                    POLICIES.join(", ")
                ),
            ));
        }
        Ok(ComponentDecl {
            attrs,
            names: names.into_iter().collect(),
            policy,
        })
    }
}

/// `pub struct Name[min..=max] { components }`
struct SystemDecl {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    min_components: usize,
    max_components: usize,
    components: Vec<ComponentDecl>,
}

impl Parse for SystemDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident: Ident = input.parse()?;

        let size;
        bracketed!(size in input);
        let min_lit: LitInt = size.parse()?;
        let max_lit = if size.peek(Token![..=]) {
            size.parse::<Token![..=]>()?;
            size.parse::<LitInt>()?
        } else {
            min_lit.clone()
        };
        let min_components = min_lit.base10_parse::<usize>()?;
        let max_components = max_lit.base10_parse::<usize>()?;
        if min_components == 0 || min_components > max_components {
            return Err(syn::Error::new(
                max_lit.span(),
                "component count range must be non-empty and start at 1 or more",
            ));
        }

        let body;
        braced!(body in input);
        let components: Vec<ComponentDecl> =
            Punctuated::<ComponentDecl, Token![,]>::parse_terminated(&body)?
                .into_iter()
                .collect();

        // One value policy per component
        if components.len() != max_components {
            return Err(syn::Error::new(
                ident.span(),
                format!(
                    "`{}` declares up to {} components but lists {}",
                    ident,
                    max_components,
                    components.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for name in components.iter().flat_map(|c| c.names.iter()) {
            if !seen.insert(name.to_string()) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("component name `{}` is used more than once", name),
                ));
            }
        }

        Ok(SystemDecl {
            attrs,
            vis,
            ident,
            min_components,
            max_components,
            components,
        })
    }
}

fn gen_coordinate_system(decl: SystemDecl) -> TokenStream {
    let SystemDecl {
        attrs,
        vis,
        ident,
        min_components,
        max_components,
        components,
    } = decl;

    let access = format_ident!("{}Access", ident);
    let access_mut = format_ident!("{}AccessMut", ident);

    let mut index_consts = vec![];
    let mut names_table = vec![];
    let mut policy_arms = vec![];
    let mut getters = vec![];
    let mut setter_decls = vec![];
    let mut setter_impls = vec![];

    for (index, component) in components.iter().enumerate() {
        let policy = &component.policy;
        policy_arms.push(quote! {
            #index => ::coordvec::ValuePolicy::#policy,
        });

        let component_attrs = &component.attrs;
        for name in component.names.iter() {
            let name_str = name.to_string();
            let const_name = format_ident!("{}", name_str.to_uppercase());
            let setter = format_ident!("set_{}", name);
            let const_doc = format!("Index of the `{}` component", name_str);
            let setter_doc = format!(
                "Store a new `{}` component, applying its value policy",
                name_str
            );

            index_consts.push(quote! {
                #[doc = #const_doc]
                pub const #const_name: usize = #index;
            });
            names_table.push(quote! { (#name_str, #index) });
            getters.push(quote! {
                #(#component_attrs)*
                #[inline]
                fn #name(&self) -> Self::Scalar {
                    self.at::<#index>()
                }
            });
            setter_decls.push(quote! {
                #[doc = #setter_doc]
                fn #setter(&mut self, value: Self::Scalar);
            });
            setter_impls.push(quote! {
                #[inline]
                fn #setter(&mut self, value: T) {
                    self.set_at::<#index>(value)
                }
            });
        }
    }

    let access_doc = format!(
        "Named read access to the components of any [`{}`] expression",
        ident
    );
    let access_mut_doc = format!(
        "Named, policy-applying write access to the components of a [`{}`] vector",
        ident
    );

    quote! {
        #(#attrs)*
        #[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
        #vis struct #ident;

        impl #ident {
            #(#index_consts)*
        }

        impl ::coordvec::Components for #ident {
            const MIN_COMPONENTS: usize = #min_components;
            const MAX_COMPONENTS: usize = #max_components;
            const NAMES: &'static [(&'static str, usize)] = &[#(#names_table),*];

            fn value_policy(index: usize) -> ::coordvec::ValuePolicy {
                match index {
                    #(#policy_arms)*
                    _ => ::coordvec::ValuePolicy::NoChange,
                }
            }
        }

        #[doc = #access_doc]
        #vis trait #access: ::coordvec::VectorExpression<Components = #ident> + Sized {
            #(#getters)*
        }

        impl<E: ::coordvec::VectorExpression<Components = #ident>> #access for E {}

        #[doc = #access_mut_doc]
        #vis trait #access_mut: ::coordvec::VectorExpression<Components = #ident> {
            #(#setter_decls)*
        }

        impl<T: ::coordvec::Real, const N: usize> #access_mut for ::coordvec::Vector<T, N, #ident> {
            #(#setter_impls)*
        }
    }
}

/// Declare a coordinate system (component layout)
///
/// ```ignore
/// coordinate_system! {
///     /// Polar coordinates
///     pub struct Polar[2] {
///         /// Radial distance
///         rho | r: NoChange,
///         /// Angle from the +X axis
///         phi | azimuth: ZeroToTwoPi,
///     }
/// }
/// ```
///
/// The bracketed size is either an exact component count or an inclusive range `min..=max`.
/// Each component lists one or more names separated by `|`,
/// followed by its value policy (`NoChange`, `ZeroToTwoPi` or `MinusPlusHalfPi`).
/// Exactly one component must be listed per possible index.
///
/// This emits the unit struct, an implementation of `coordvec::Components`,
/// one index constant per name (e.g. `Polar::RHO`),
/// a read trait `PolarAccess` implemented for every expression of the layout,
/// and a write trait `PolarAccessMut` implemented for `coordvec::Vector`.
///
/// The arithmetic rules are not generated:
/// implement `coordvec::CoordinateSystem` for the struct,
/// leaving it empty to get the Cartesian rules.
#[proc_macro]
pub fn coordinate_system(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as SystemDecl);
    gen_coordinate_system(input).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: TokenStream) -> Result<SystemDecl> {
        syn::parse2::<SystemDecl>(tokens)
    }

    #[test]
    fn parses_fixed_size() {
        let decl = parse(quote! {
            pub struct Polar[2] {
                rho | r: NoChange,
                phi | azimuth: ZeroToTwoPi,
            }
        })
        .unwrap();
        assert_eq!(decl.ident.to_string(), "Polar");
        assert_eq!((decl.min_components, decl.max_components), (2, 2));
        assert_eq!(decl.components.len(), 2);
        assert_eq!(decl.components[0].names.len(), 2);
        assert_eq!(decl.components[1].policy.to_string(), "ZeroToTwoPi");
    }

    #[test]
    fn parses_size_range() {
        let decl = parse(quote! {
            struct Axes[1..=3] { a: NoChange, b: NoChange, c: NoChange }
        })
        .unwrap();
        assert_eq!((decl.min_components, decl.max_components), (1, 3));
    }

    #[test]
    fn rejects_policy_count_mismatch() {
        let err = parse(quote! {
            struct Broken[3] { a: NoChange, b: NoChange }
        })
        .err()
        .unwrap();
        assert!(err.to_string().contains("lists 2"));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = parse(quote! {
            struct Broken[1] { a: Wrap }
        })
        .err()
        .unwrap();
        assert!(err.to_string().contains("unknown value policy"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = parse(quote! {
            struct Broken[2] { a | b: NoChange, b: NoChange }
        })
        .err()
        .unwrap();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_empty_range() {
        assert!(parse(quote! { struct Broken[3..=2] { a: NoChange, b: NoChange } }).is_err());
        assert!(parse(quote! { struct Broken[0] {} }).is_err());
    }

    #[test]
    fn emits_accessors_for_every_name() {
        let decl = parse(quote! {
            pub struct Polar[2] {
                rho | r: NoChange,
                phi | azimuth: ZeroToTwoPi,
            }
        })
        .unwrap();
        let emitted = gen_coordinate_system(decl).to_string();
        for item in [
            "trait PolarAccess",
            "trait PolarAccessMut",
            "fn azimuth",
            "fn set_r",
            "pub const PHI",
            "ZeroToTwoPi",
        ] {
            assert!(emitted.contains(item), "missing `{}`", item);
        }
    }
}
