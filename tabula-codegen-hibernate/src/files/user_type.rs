use serde::Serialize;
use tabula_codegen::View;

use super::preamble;

const IMPORTS: &[&str] = &[
    "java.io.Serializable",
    "java.sql.PreparedStatement",
    "java.sql.ResultSet",
    "java.sql.SQLException",
    "java.sql.Types",
    "java.util.Objects",
];

const HIBERNATE_IMPORTS: &[&str] = &[
    "org.hibernate.HibernateException",
    "org.hibernate.engine.spi.SharedSessionContractImplementor",
    "org.hibernate.usertype.UserType",
];

/// The `EUserType.java` Hibernate mapping for a database enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTypeView {
    pub package_name: String,
    /// The enum class this type maps, e.g. `Status`.
    pub class_name: String,
    /// Database type name.
    pub sql_name: String,
}

impl View for UserTypeView {
    const TEMPLATE: &'static str = "enum_usertype";

    fn render_builtin(&self) -> String {
        let name = &self.class_name;

        preamble(&self.package_name)
            .each(IMPORTS, |b, import| b.line(&format!("import {};", import)))
            .blank()
            .each(HIBERNATE_IMPORTS, |b, import| {
                b.line(&format!("import {};", import))
            })
            .blank()
            .line(&format!(
                "/** Maps the database enum `{}` to {{@link {}}}. */",
                self.sql_name, name
            ))
            .block_with_close(
                &format!("public class {}UserType implements UserType {{", name),
                "}",
                |b| {
                    b.line("@Override")
                        .block_with_close("public int[] sqlTypes() {", "}", |b| {
                            b.line("return new int[] { Types.OTHER };")
                        })
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            &format!("public Class<{}> returnedClass() {{", name),
                            "}",
                            |b| b.line(&format!("return {}.class;", name)),
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public boolean equals(Object x, Object y) throws HibernateException {",
                            "}",
                            |b| b.line("return Objects.equals(x, y);"),
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public int hashCode(Object x) throws HibernateException {",
                            "}",
                            |b| b.line("return Objects.hashCode(x);"),
                        )
                        .blank()
                        .line("@Override")
                        .line("public Object nullSafeGet(ResultSet rs, String[] names, SharedSessionContractImplementor session, Object owner)")
                        .block_with_close(
                            "        throws HibernateException, SQLException {",
                            "}",
                            |b| {
                                b.line("String literal = rs.getString(names[0]);").line(&format!(
                                    "return literal == null ? null : {}.fromLiteral(literal);",
                                    name
                                ))
                            },
                        )
                        .blank()
                        .line("@Override")
                        .line("public void nullSafeSet(PreparedStatement st, Object value, int index, SharedSessionContractImplementor session)")
                        .block_with_close(
                            "        throws HibernateException, SQLException {",
                            "}",
                            |b| {
                                b.block_with_close("if (value == null) {", "} else {", |b| {
                                    b.line("st.setNull(index, Types.OTHER);")
                                })
                                .indent()
                                .line(&format!(
                                    "st.setObject(index, (({}) value).getLiteral(), Types.OTHER);",
                                    name
                                ))
                                .dedent()
                                .line("}")
                            },
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public Object deepCopy(Object value) throws HibernateException {",
                            "}",
                            |b| b.line("return value;"),
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close("public boolean isMutable() {", "}", |b| {
                            b.line("return false;")
                        })
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public Serializable disassemble(Object value) throws HibernateException {",
                            "}",
                            |b| b.line("return (Serializable) value;"),
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public Object assemble(Serializable cached, Object owner) throws HibernateException {",
                            "}",
                            |b| b.line("return cached;"),
                        )
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public Object replace(Object original, Object target, Object owner) throws HibernateException {",
                            "}",
                            |b| b.line("return original;"),
                        )
                },
            )
            .build()
    }
}
