use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

/// Generate the `Addresses` forwarding impl for a struct with a `header` field.
pub fn address_header_inner(input: &DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;

    // The macro only works on structs that actually embed a header.
    let has_header = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .any(|field| field.ident.as_ref().is_some_and(|ident| ident == "header")),
            _ => false,
        },
        _ => false,
    };

    if !has_header {
        return Err(Error::new_spanned(
            name,
            "AddressHeader can only be derived for structs with a named `header` field",
        ));
    }

    Ok(quote! {
        impl crate::Addresses for #name {
            fn src(&self) -> Option<&crate::frame::components::MacAddress> {
                crate::Addresses::src(&self.header)
            }

            fn dest(&self) -> &crate::frame::components::MacAddress {
                crate::Addresses::dest(&self.header)
            }

            fn bssid(&self) -> Option<&crate::frame::components::MacAddress> {
                crate::Addresses::bssid(&self.header)
            }
        }
    })
}
