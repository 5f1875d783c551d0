use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Path, parse_macro_input, parse_quote};

/// Implements `typedcoll::Item` using `PartialEq` for equality and the
/// type itself as item type.
///
/// `#[item(supertype = Path)]`, repeatable, makes values of this type
/// acceptable in collections declaring `Path`, or anything `Path` itself
/// accepts, as their item type.
#[proc_macro_derive(Item, attributes(item))]
pub fn derive_item(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        generics.make_where_clause().predicates.push(parse_quote!(
            Self: ::std::clone::Clone + ::std::fmt::Debug + ::std::cmp::PartialEq + 'static
        ));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let supertypes = match parse_supertypes(&input) {
        Ok(supertypes) => supertypes,
        Err(error) => return error.to_compile_error().into(),
    };

    let accepts_type = if supertypes.is_empty() {
        quote! {}
    } else {
        quote! {
            fn accepts_type(declared: ::typedcoll::ItemType) -> bool {
                declared.is::<Self>()
                    #(|| <#supertypes as ::typedcoll::Item>::accepts_type(declared))*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::typedcoll::Item for #struct_name #ty_generics #where_clause {
            fn equals_to(&self, other: &Self) -> bool {
                self == other
            }

            fn item_type(&self) -> ::typedcoll::ItemType {
                ::typedcoll::ItemType::of::<Self>()
            }

            #accepts_type
        }
    };

    TokenStream::from(expanded)
}

fn parse_supertypes(input: &DeriveInput) -> syn::Result<Vec<Path>> {
    let mut supertypes = Vec::new();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("item")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("supertype") {
                supertypes.push(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported item attribute, expected `supertype = Path`"))
            }
        })?;
    }

    Ok(supertypes)
}
