//! Global CSS styles for the portfolio page.

/// Icon font used by buttons and skill cards.
pub const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-dark: #0f172a;
  --bg-darker: #020617;
  --bg-card: #1e293b;
  --border: #334155;

  /* Accents */
  --primary: #6366f1;
  --primary-glow: rgba(99, 102, 241, 0.35);
  --secondary: #22d3ee;

  /* Text */
  --text-primary: #f8fafc;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  /* Semantic */
  --success: #22c55e;
  --danger: #ef4444;

  /* Layout */
  --navbar-height: 70px;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-dark);
  color: var(--text-primary);
  line-height: 1.7;
  overflow-x: hidden;
}

a {
  color: var(--secondary);
  text-decoration: none;
}

/* === Scroll Progress === */
.scroll-progress {
  position: fixed;
  top: 0;
  left: 0;
  height: 3px;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  z-index: 1001;
  transition: width 80ms linear;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--navbar-height);
  z-index: 1000;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(2, 6, 23, 0.92);
  backdrop-filter: blur(10px);
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  position: relative;
  transition: color var(--transition-fast);
}

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--primary);
  transition: width var(--transition-normal);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

.nav-link.active::after {
  width: 100%;
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle .bar {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.nav-toggle.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.nav-toggle.active .bar:nth-child(2) { opacity: 0; }
.nav-toggle.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

/* === Sections & Parallax === */
.section {
  position: relative;
  padding: 6rem 0;
  overflow: hidden;
}

.parallax-bg {
  position: absolute;
  inset: -30% 0;
  z-index: 0;
  background: radial-gradient(circle at 30% 20%, var(--primary-glow), transparent 60%),
              radial-gradient(circle at 80% 70%, rgba(34, 211, 238, 0.15), transparent 55%);
  will-change: transform;
  pointer-events: none;
}

.container {
  position: relative;
  z-index: 1;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 2rem;
}

.section-title {
  font-size: 2.25rem;
  margin-bottom: 2.5rem;
  text-align: center;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  text-align: center;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
}

.hero-subtitle {
  font-size: 1.35rem;
  color: var(--text-secondary);
  margin: 1rem 0 2rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.8rem 1.8rem;
  border-radius: 8px;
  border: 2px solid var(--primary);
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--primary);
  color: var(--text-primary);
}

.btn-secondary {
  background: transparent;
  color: var(--text-primary);
}

.btn:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px var(--primary-glow);
}

.btn:disabled {
  opacity: 0.7;
  cursor: wait;
}

/* === Cards === */
.about-text {
  max-width: 760px;
  margin: 0 auto;
  color: var(--text-secondary);
  font-size: 1.1rem;
  text-align: center;
}

.skills-grid,
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.skill-card,
.project-card,
.timeline-item {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
}

.skill-card {
  padding: 2rem;
}

.skill-card i {
  font-size: 2rem;
  color: var(--primary);
  margin-bottom: 1rem;
}

.skill-card ul {
  list-style: none;
  color: var(--text-secondary);
}

.project-image img {
  width: 100%;
  height: 200px;
  object-fit: cover;
  display: block;
}

.project-info {
  padding: 1.5rem;
}

.project-info p {
  color: var(--text-secondary);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: rgba(99, 102, 241, 0.15);
  color: var(--secondary);
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 800px;
  margin: 0 auto;
}

.timeline-item {
  padding: 1.5rem 2rem;
  border-left: 4px solid var(--primary);
}

.timeline-meta {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* === Contact Form === */
.contact-intro {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.contact-form {
  max-width: 700px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.form-group input,
.form-group textarea {
  background: var(--bg-darker);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.8rem 1rem;
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-group input:focus,
.form-group textarea:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-glow);
}

.form-message {
  display: none;
  padding: 1rem;
  border-radius: 8px;
}

.form-message.success {
  display: block;
  background: rgba(34, 197, 94, 0.12);
  border: 1px solid var(--success);
  color: var(--success);
}

.form-message.error {
  display: block;
  background: rgba(239, 68, 68, 0.12);
  border: 1px solid var(--danger);
  color: var(--danger);
}

/* === Reveal Animations === */
[data-aos] {
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

[data-aos="fade-up"] { transform: translateY(40px); }
[data-aos="fade-left"] { transform: translateX(40px); }

[data-aos].aos-animate {
  opacity: 1;
  transform: none;
}

/* === Footer & Back To Top === */
.footer {
  text-align: center;
  padding: 2rem;
  background: var(--bg-darker);
  color: var(--text-muted);
}

.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: none;
  background: var(--primary);
  color: var(--text-primary);
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.back-to-top.visible {
  opacity: 1;
  pointer-events: auto;
}

/* === Mobile === */
@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: var(--navbar-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    padding: 2rem 0;
    background: var(--bg-darker);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }

  .hero-title {
    font-size: 2.4rem;
  }

  .form-row {
    grid-template-columns: 1fr;
  }
}
"#;
