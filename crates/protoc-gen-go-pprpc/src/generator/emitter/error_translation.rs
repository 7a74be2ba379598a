use super::{ERROR_TRANSLATION_ROUTINE, UnitBuilder};
use crate::generator::{
  ast::ErrorTranslation,
  resolver::{Role, ambient},
};

const DOMAIN_ERROR_TYPE: &str = "Error";
const DOMAIN_CODE_FIELD: &str = "Code";
const DOMAIN_CODE_META_KEY: &str = "domainCode";

impl UnitBuilder<'_> {
  /// Internal twirp error, annotated with the domain error code when there is one.
  pub(super) fn error_translation(&mut self) -> ErrorTranslation {
    let transport_error = self.reference(ambient::twirp("Error"));
    let new_error = self.reference(ambient::twirp("NewError"));
    let internal_code = self.reference(ambient::twirp("Internal"));
    let errors_as = self.reference(ambient::errors("As"));
    let domain_error = self.resolve(Role::DomainType, DOMAIN_ERROR_TYPE);
    let sprintf = self.reference(ambient::fmt("Sprintf"));
    let wrap_error = self.reference(ambient::twirp("WrapError"));

    ErrorTranslation::builder()
      .name(ERROR_TRANSLATION_ROUTINE)
      .transport_error(transport_error)
      .new_error(new_error)
      .internal_code(internal_code)
      .wrap_error(wrap_error)
      .errors_as(errors_as)
      .sprintf(sprintf)
      .domain_error(domain_error)
      .code_field(DOMAIN_CODE_FIELD)
      .meta_key(DOMAIN_CODE_META_KEY)
      .build()
  }
}
