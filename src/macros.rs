#[macro_export]
macro_rules! ini {
    // Globals without a trailing comma: normalize and re-enter.
    ($($gkey:literal = $gvalue:expr),+) => {
        $crate::ini!($($gkey = $gvalue,)+)
    };

    // Globals first (comma after each), then any number of sections.
    (
        $($gkey:literal = $gvalue:expr,)*
        $([$name:literal] { $($key:literal = $value:expr),* $(,)? } $(,)?)*
    ) => {{
        let mut document = $crate::IniDocument::default();
        $(
            document.add_field($gkey, &$gvalue.to_string());
        )*
        $(
            document.create_section($name);
            $(
                document.get_section($name).add_field($key, &$value.to_string());
            )*
        )*
        document
    }};
}

#[cfg(test)]
mod tests {
    use crate::IniDocument;

    #[test]
    fn test_ini_macro_empty() {
        let doc = ini!();
        assert_eq!(doc, IniDocument::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_ini_macro_globals() {
        let doc = ini! {
            "name" = "app",
            "port" = 8080
        };
        assert_eq!(doc.render(), "name = app\nport = 8080");

        let trailing = ini! {
            "name" = "app",
            "port" = 8080,
        };
        assert_eq!(doc, trailing);
    }

    #[test]
    fn test_ini_macro_sections() {
        let doc = ini! {
            ["server"] {
                "host" = "localhost",
                "port" = 8080
            }
            ["auth"] {
                "user" = "admin"
            }
        };
        assert_eq!(
            doc.render(),
            "[server]\nhost = localhost\nport = 8080\n\n[auth]\nuser = admin"
        );
    }

    #[test]
    fn test_ini_macro_globals_then_sections() {
        let doc = ini! {
            "title" = "demo",
            ["paths"] {
                "data" = "/var/lib/app",
            },
            ["limits"] {}
        };

        let mut expected = IniDocument::default();
        expected.add_field("title", "demo");
        expected.create_section("paths").add_field("data", "/var/lib/app");
        expected.create_section("limits");
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_ini_macro_accepts_display_values() {
        let owned = String::from("owned");
        let doc = ini! {
            "int" = -3,
            "float" = 2.5,
            "flag" = true,
            "owned" = owned,
            "computed" = 6 * 7
        };
        assert_eq!(doc.field("int").map(|f| f.get()), Some("-3"));
        assert_eq!(doc.field("float").map(|f| f.get()), Some("2.5"));
        assert_eq!(doc.field("flag").map(|f| f.get()), Some("true"));
        assert_eq!(doc.field("owned").map(|f| f.get()), Some("owned"));
        assert_eq!(doc.field("computed").map(|f| f.get()), Some("42"));
    }

    #[test]
    fn test_ini_macro_duplicate_key_takes_last() {
        let doc = ini! {
            "k" = "first",
            "k" = "second"
        };
        assert_eq!(doc.fields().len(), 1);
        assert_eq!(doc.field("k").map(|f| f.get()), Some("second"));
    }
}
