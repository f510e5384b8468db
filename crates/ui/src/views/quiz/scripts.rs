/// Typesets every `[data-tex]` element with KaTeX once it is available.
///
/// Elements already rendered for their current TeX source are skipped, and the
/// script polls briefly while the KaTeX bundle is still loading.
pub(super) fn typeset_math_script() -> &'static str {
    r#"(function() {
            const typeset = function(attempt) {
                const katex = window.katex;
                if (!katex) {
                    if (attempt < 20) {
                        setTimeout(function() { typeset(attempt + 1); }, 150);
                    }
                    return;
                }
                document.querySelectorAll("[data-tex]").forEach(function(el) {
                    const tex = el.getAttribute("data-tex");
                    if (el.getAttribute("data-typeset") === tex) {
                        return;
                    }
                    try {
                        katex.render(tex, el, {
                            displayMode: el.classList.contains("math-block"),
                            throwOnError: false,
                        });
                        el.setAttribute("data-typeset", tex);
                    } catch (err) {
                        console.warn("math typesetting failed", err);
                    }
                });
            };
            typeset(0);
        })();"#
}
